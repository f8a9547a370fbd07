//! Node catalog for Python-style syntax trees.
//!
//! This module provides the statement and expression types consumed by the
//! renderer, the walker, and the dumper. Trees are built by a front end (or
//! deserialized) and never mutated here; every node exclusively owns its
//! children.

use serde::{Deserialize, Serialize};

/// Line/column location of a node in the original source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    pub fn new(line: u32, column: u32) -> Self {
        Pos { line, column }
    }
}

/// Wrapper carrying a source position with a statement or expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Located<T> {
    pub node: T,
    pub pos: Pos,
}

impl<T> Located<T> {
    pub fn new(node: T, pos: Pos) -> Self {
        Located { node, pos }
    }
}

impl<T> From<T> for Located<T> {
    fn from(node: T) -> Self {
        Located {
            node,
            pos: Pos::default(),
        }
    }
}

/// A statement with its source position.
pub type StmtNode = Located<Stmt>;

/// An expression with its source position.
pub type ExprNode = Located<Expr>;

/// A complete source file: a sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Module {
    pub body: Vec<StmtNode>,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    FunctionDef {
        name: String,
        args: Arguments,
        body: Vec<StmtNode>,
        decorator_list: Vec<ExprNode>,
        returns: Option<ExprNode>,
    },
    ClassDef {
        name: String,
        bases: Vec<ExprNode>,
        keywords: Vec<Keyword>,
        starargs: Option<ExprNode>,
        kwargs: Option<ExprNode>,
        body: Vec<StmtNode>,
        decorator_list: Vec<ExprNode>,
    },
    Return {
        value: Option<ExprNode>,
    },
    Delete {
        targets: Vec<ExprNode>,
    },
    Assign {
        targets: Vec<ExprNode>,
        value: ExprNode,
    },
    AugAssign {
        target: ExprNode,
        op: Operator,
        value: ExprNode,
    },
    For {
        target: ExprNode,
        iter: ExprNode,
        body: Vec<StmtNode>,
        orelse: Vec<StmtNode>,
    },
    While {
        test: ExprNode,
        body: Vec<StmtNode>,
        orelse: Vec<StmtNode>,
    },
    If {
        test: ExprNode,
        body: Vec<StmtNode>,
        orelse: Vec<StmtNode>,
    },
    With {
        items: Vec<WithItem>,
        body: Vec<StmtNode>,
    },
    Raise {
        exc: Option<ExprNode>,
        cause: Option<ExprNode>,
    },
    Try {
        body: Vec<StmtNode>,
        handlers: Vec<ExceptHandler>,
        orelse: Vec<StmtNode>,
        finalbody: Vec<StmtNode>,
    },
    Assert {
        test: ExprNode,
        msg: Option<ExprNode>,
    },
    Import {
        names: Vec<Alias>,
    },
    ImportFrom {
        module: Option<String>,
        names: Vec<Alias>,
    },
    Global {
        names: Vec<String>,
    },
    Nonlocal {
        names: Vec<String>,
    },
    Expr {
        value: ExprNode,
    },
    Pass,
    Break,
    Continue,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    BoolOp {
        op: BoolOperator,
        values: Vec<ExprNode>,
    },
    BinOp {
        left: Box<ExprNode>,
        op: Operator,
        right: Box<ExprNode>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<ExprNode>,
    },
    Lambda {
        args: Box<Arguments>,
        body: Box<ExprNode>,
    },
    IfExp {
        test: Box<ExprNode>,
        body: Box<ExprNode>,
        orelse: Box<ExprNode>,
    },
    Dict {
        keys: Vec<ExprNode>,
        values: Vec<ExprNode>,
    },
    Set {
        elts: Vec<ExprNode>,
    },
    ListComp {
        elt: Box<ExprNode>,
        generators: Vec<Comprehension>,
    },
    SetComp {
        elt: Box<ExprNode>,
        generators: Vec<Comprehension>,
    },
    DictComp {
        key: Box<ExprNode>,
        value: Box<ExprNode>,
        generators: Vec<Comprehension>,
    },
    GeneratorExp {
        elt: Box<ExprNode>,
        generators: Vec<Comprehension>,
    },
    Yield {
        value: Option<Box<ExprNode>>,
    },
    YieldFrom {
        value: Box<ExprNode>,
    },
    Compare {
        left: Box<ExprNode>,
        ops: Vec<CmpOperator>,
        comparators: Vec<ExprNode>,
    },
    Call {
        func: Box<ExprNode>,
        args: Vec<ExprNode>,
        keywords: Vec<Keyword>,
        starargs: Option<Box<ExprNode>>,
        kwargs: Option<Box<ExprNode>>,
    },
    Num {
        n: Number,
    },
    Str {
        s: String,
    },
    Bytes {
        s: Vec<u8>,
    },
    NameConstant {
        value: Singleton,
    },
    Ellipsis,
    Attribute {
        value: Box<ExprNode>,
        attr: String,
    },
    Subscript {
        value: Box<ExprNode>,
        slice: Box<ExprNode>,
    },
    Starred {
        value: Box<ExprNode>,
    },
    Name {
        id: String,
    },
    List {
        elts: Vec<ExprNode>,
    },
    Tuple {
        elts: Vec<ExprNode>,
    },
    /// Renderable only as the direct child of a `Subscript`.
    Slice {
        lower: Option<Box<ExprNode>>,
        upper: Option<Box<ExprNode>>,
        step: Option<Box<ExprNode>>,
    },
}

/// Boolean operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolOperator {
    And,
    Or,
}

/// Binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

/// Unary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

/// Comparison operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmpOperator {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

/// A numeric literal value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// The literal singletons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Singleton {
    True,
    False,
    None,
}

/// The parameter list of a function or lambda.
///
/// `defaults` aligns with the tail of `args`; `kw_defaults` aligns with
/// `kwonlyargs` one to one, with `None` for parameters without a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Arguments {
    pub args: Vec<Arg>,
    pub vararg: Option<String>,
    pub kwonlyargs: Vec<Arg>,
    pub kw_defaults: Vec<Option<ExprNode>>,
    pub kwarg: Option<String>,
    pub defaults: Vec<ExprNode>,
}

/// A single named parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub arg: String,
    pub annotation: Option<ExprNode>,
}

/// A keyword argument in a call or class header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub arg: String,
    pub value: ExprNode,
}

/// An imported name with an optional rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
}

/// One `for … in … [if …]` clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comprehension {
    pub target: ExprNode,
    pub iter: ExprNode,
    pub ifs: Vec<ExprNode>,
}

/// One `except` clause of a `try` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptHandler {
    pub typ: Option<ExprNode>,
    pub name: Option<String>,
    pub body: Vec<StmtNode>,
}

/// One `… [as …]` item of a `with` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithItem {
    pub context_expr: ExprNode,
    pub optional_vars: Option<ExprNode>,
}

impl Stmt {
    /// Returns the kind name of this statement as a string.
    pub fn kind(&self) -> &'static str {
        use Stmt::*;
        match self {
            FunctionDef { .. } => "FunctionDef",
            ClassDef { .. } => "ClassDef",
            Return { .. } => "Return",
            Delete { .. } => "Delete",
            Assign { .. } => "Assign",
            AugAssign { .. } => "AugAssign",
            For { .. } => "For",
            While { .. } => "While",
            If { .. } => "If",
            With { .. } => "With",
            Raise { .. } => "Raise",
            Try { .. } => "Try",
            Assert { .. } => "Assert",
            Import { .. } => "Import",
            ImportFrom { .. } => "ImportFrom",
            Global { .. } => "Global",
            Nonlocal { .. } => "Nonlocal",
            Expr { .. } => "Expr",
            Pass => "Pass",
            Break => "Break",
            Continue => "Continue",
        }
    }
}

impl Expr {
    /// Returns the kind name of this expression as a string.
    pub fn kind(&self) -> &'static str {
        use Expr::*;
        match self {
            BoolOp { .. } => "BoolOp",
            BinOp { .. } => "BinOp",
            UnaryOp { .. } => "UnaryOp",
            Lambda { .. } => "Lambda",
            IfExp { .. } => "IfExp",
            Dict { .. } => "Dict",
            Set { .. } => "Set",
            ListComp { .. } => "ListComp",
            SetComp { .. } => "SetComp",
            DictComp { .. } => "DictComp",
            GeneratorExp { .. } => "GeneratorExp",
            Yield { .. } => "Yield",
            YieldFrom { .. } => "YieldFrom",
            Compare { .. } => "Compare",
            Call { .. } => "Call",
            Num { .. } => "Num",
            Str { .. } => "Str",
            Bytes { .. } => "Bytes",
            NameConstant { .. } => "NameConstant",
            Ellipsis => "Ellipsis",
            Attribute { .. } => "Attribute",
            Subscript { .. } => "Subscript",
            Starred { .. } => "Starred",
            Name { .. } => "Name",
            List { .. } => "List",
            Tuple { .. } => "Tuple",
            Slice { .. } => "Slice",
        }
    }

    /// Returns true if this expression could appear as an assignment target:
    /// a name, attribute, subscript, or a tuple/list of targets containing at
    /// most one starred target.
    pub fn is_possible_target(&self) -> bool {
        use Expr::*;
        match self {
            Name { .. } | Attribute { .. } | Subscript { .. } => true,
            Tuple { elts } | List { elts } => {
                let mut starred = 0;
                for elt in elts {
                    match &elt.node {
                        Starred { value } => {
                            starred += 1;
                            if !value.node.is_possible_target() {
                                return false;
                            }
                        }
                        other => {
                            if !other.is_possible_target() {
                                return false;
                            }
                        }
                    }
                }
                starred <= 1
            }
            _ => false,
        }
    }
}

impl Number {
    /// Returns true for a literal negative value, which needs parentheses as
    /// the left operand of a binary operator.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(n) => *n < 0,
            Number::Float(x) => *x < 0.0,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps a decimal point, so the literal stays a
            // float when parsed back.
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl Singleton {
    pub fn as_str(self) -> &'static str {
        match self {
            Singleton::True => "True",
            Singleton::False => "False",
            Singleton::None => "None",
        }
    }
}

impl BoolOperator {
    /// The source token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            BoolOperator::And => "and",
            BoolOperator::Or => "or",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoolOperator::And => "And",
            BoolOperator::Or => "Or",
        }
    }
}

impl Operator {
    /// The source token for this operator.
    pub fn token(self) -> &'static str {
        use Operator::*;
        match self {
            Add => "+",
            Sub => "-",
            Mult => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            LShift => "<<",
            RShift => ">>",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            FloorDiv => "//",
        }
    }

    pub fn name(self) -> &'static str {
        use Operator::*;
        match self {
            Add => "Add",
            Sub => "Sub",
            Mult => "Mult",
            Div => "Div",
            Mod => "Mod",
            Pow => "Pow",
            LShift => "LShift",
            RShift => "RShift",
            BitOr => "BitOr",
            BitXor => "BitXor",
            BitAnd => "BitAnd",
            FloorDiv => "FloorDiv",
        }
    }
}

impl UnaryOperator {
    /// The source prefix for this operator, including the space after `not`.
    pub fn token(self) -> &'static str {
        use UnaryOperator::*;
        match self {
            Invert => "~",
            Not => "not ",
            UAdd => "+",
            USub => "-",
        }
    }

    pub fn name(self) -> &'static str {
        use UnaryOperator::*;
        match self {
            Invert => "Invert",
            Not => "Not",
            UAdd => "UAdd",
            USub => "USub",
        }
    }
}

impl CmpOperator {
    /// The source token for this operator.
    pub fn token(self) -> &'static str {
        use CmpOperator::*;
        match self {
            Eq => "==",
            NotEq => "!=",
            Lt => "<",
            LtE => "<=",
            Gt => ">",
            GtE => ">=",
            Is => "is",
            IsNot => "is not",
            In => "in",
            NotIn => "not in",
        }
    }

    pub fn name(self) -> &'static str {
        use CmpOperator::*;
        match self {
            Eq => "Eq",
            NotEq => "NotEq",
            Lt => "Lt",
            LtE => "LtE",
            Gt => "Gt",
            GtE => "GtE",
            Is => "Is",
            IsNot => "IsNot",
            In => "In",
            NotIn => "NotIn",
        }
    }
}
