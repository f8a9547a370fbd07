//! Uniform borrowed view over catalog nodes.
//!
//! `NodeRef` unifies every node kind behind one type so the walker and the
//! dumper can treat trees generically, and `fields` enumerates each kind's
//! semantic fields in declared order. Operator tags and scalar values are
//! fields, not nodes.

use crate::ast::{
    Alias, Arg, Arguments, Comprehension, ExceptHandler, Expr, ExprNode, Keyword, Module, Pos,
    Singleton, Stmt, StmtNode, WithItem,
};

/// A borrowed reference to any node in a tree.
#[derive(Debug, Copy, Clone)]
pub enum NodeRef<'a> {
    Module(&'a Module),
    Stmt(&'a StmtNode),
    Expr(&'a ExprNode),
    Arguments(&'a Arguments),
    Arg(&'a Arg),
    Keyword(&'a Keyword),
    Alias(&'a Alias),
    Comprehension(&'a Comprehension),
    ExceptHandler(&'a ExceptHandler),
    WithItem(&'a WithItem),
}

/// The value of one node field, as seen by the walker and the dumper.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    Node(NodeRef<'a>),
    OptNode(Option<NodeRef<'a>>),
    Seq(Vec<FieldValue<'a>>),
    Ident(&'a str),
    OptIdent(Option<&'a str>),
    Num(crate::ast::Number),
    Bytes(&'a [u8]),
    Singleton(Singleton),
    Op(&'static str),
    UInt(u32),
}

impl<'a> From<&'a Module> for NodeRef<'a> {
    fn from(node: &'a Module) -> Self {
        NodeRef::Module(node)
    }
}

impl<'a> From<&'a StmtNode> for NodeRef<'a> {
    fn from(node: &'a StmtNode) -> Self {
        NodeRef::Stmt(node)
    }
}

impl<'a> From<&'a ExprNode> for NodeRef<'a> {
    fn from(node: &'a ExprNode) -> Self {
        NodeRef::Expr(node)
    }
}

impl<'a> From<&'a Arguments> for NodeRef<'a> {
    fn from(node: &'a Arguments) -> Self {
        NodeRef::Arguments(node)
    }
}

impl<'a> NodeRef<'a> {
    /// Returns the kind name of the referenced node as a string.
    pub fn kind(self) -> &'static str {
        match self {
            NodeRef::Module(_) => "Module",
            NodeRef::Stmt(s) => s.node.kind(),
            NodeRef::Expr(e) => e.node.kind(),
            NodeRef::Arguments(_) => "arguments",
            NodeRef::Arg(_) => "arg",
            NodeRef::Keyword(_) => "keyword",
            NodeRef::Alias(_) => "alias",
            NodeRef::Comprehension(_) => "comprehension",
            NodeRef::ExceptHandler(_) => "ExceptHandler",
            NodeRef::WithItem(_) => "withitem",
        }
    }

    /// Returns the source position, for the node kinds that carry one.
    pub fn pos(self) -> Option<Pos> {
        match self {
            NodeRef::Stmt(s) => Some(s.pos),
            NodeRef::Expr(e) => Some(e.pos),
            _ => None,
        }
    }

    /// Enumerates the semantic fields of the referenced node in declared
    /// order.
    pub fn fields(self) -> Vec<(&'static str, FieldValue<'a>)> {
        match self {
            NodeRef::Module(m) => vec![("body", stmt_seq(&m.body))],
            NodeRef::Stmt(s) => stmt_fields(&s.node),
            NodeRef::Expr(e) => expr_fields(&e.node),
            NodeRef::Arguments(a) => vec![
                ("args", arg_seq(&a.args)),
                ("vararg", FieldValue::OptIdent(a.vararg.as_deref())),
                ("kwonlyargs", arg_seq(&a.kwonlyargs)),
                (
                    "kw_defaults",
                    FieldValue::Seq(
                        a.kw_defaults
                            .iter()
                            .map(|d| FieldValue::OptNode(d.as_ref().map(NodeRef::Expr)))
                            .collect(),
                    ),
                ),
                ("kwarg", FieldValue::OptIdent(a.kwarg.as_deref())),
                ("defaults", expr_seq(&a.defaults)),
            ],
            NodeRef::Arg(a) => vec![
                ("arg", FieldValue::Ident(&a.arg)),
                ("annotation", opt_expr(a.annotation.as_ref())),
            ],
            NodeRef::Keyword(k) => vec![
                ("arg", FieldValue::Ident(&k.arg)),
                ("value", FieldValue::Node(NodeRef::Expr(&k.value))),
            ],
            NodeRef::Alias(a) => vec![
                ("name", FieldValue::Ident(&a.name)),
                ("asname", FieldValue::OptIdent(a.asname.as_deref())),
            ],
            NodeRef::Comprehension(c) => vec![
                ("target", FieldValue::Node(NodeRef::Expr(&c.target))),
                ("iter", FieldValue::Node(NodeRef::Expr(&c.iter))),
                ("ifs", expr_seq(&c.ifs)),
            ],
            NodeRef::ExceptHandler(h) => vec![
                ("type", opt_expr(h.typ.as_ref())),
                ("name", FieldValue::OptIdent(h.name.as_deref())),
                ("body", stmt_seq(&h.body)),
            ],
            NodeRef::WithItem(w) => vec![
                ("context_expr", FieldValue::Node(NodeRef::Expr(&w.context_expr))),
                ("optional_vars", opt_expr(w.optional_vars.as_ref())),
            ],
        }
    }
}

fn stmt_fields(stmt: &Stmt) -> Vec<(&'static str, FieldValue<'_>)> {
    use Stmt::*;
    match stmt {
        FunctionDef {
            name,
            args,
            body,
            decorator_list,
            returns,
        } => vec![
            ("name", FieldValue::Ident(name)),
            ("args", FieldValue::Node(NodeRef::Arguments(args))),
            ("body", stmt_seq(body)),
            ("decorator_list", expr_seq(decorator_list)),
            ("returns", opt_expr(returns.as_ref())),
        ],
        ClassDef {
            name,
            bases,
            keywords,
            starargs,
            kwargs,
            body,
            decorator_list,
        } => vec![
            ("name", FieldValue::Ident(name)),
            ("bases", expr_seq(bases)),
            ("keywords", keyword_seq(keywords)),
            ("starargs", opt_expr(starargs.as_ref())),
            ("kwargs", opt_expr(kwargs.as_ref())),
            ("body", stmt_seq(body)),
            ("decorator_list", expr_seq(decorator_list)),
        ],
        Return { value } => vec![("value", opt_expr(value.as_ref()))],
        Delete { targets } => vec![("targets", expr_seq(targets))],
        Assign { targets, value } => vec![
            ("targets", expr_seq(targets)),
            ("value", FieldValue::Node(NodeRef::Expr(value))),
        ],
        AugAssign { target, op, value } => vec![
            ("target", FieldValue::Node(NodeRef::Expr(target))),
            ("op", FieldValue::Op(op.name())),
            ("value", FieldValue::Node(NodeRef::Expr(value))),
        ],
        For {
            target,
            iter,
            body,
            orelse,
        } => vec![
            ("target", FieldValue::Node(NodeRef::Expr(target))),
            ("iter", FieldValue::Node(NodeRef::Expr(iter))),
            ("body", stmt_seq(body)),
            ("orelse", stmt_seq(orelse)),
        ],
        While { test, body, orelse } | If { test, body, orelse } => vec![
            ("test", FieldValue::Node(NodeRef::Expr(test))),
            ("body", stmt_seq(body)),
            ("orelse", stmt_seq(orelse)),
        ],
        With { items, body } => vec![
            (
                "items",
                FieldValue::Seq(items.iter().map(|i| FieldValue::Node(NodeRef::WithItem(i))).collect()),
            ),
            ("body", stmt_seq(body)),
        ],
        Raise { exc, cause } => vec![
            ("exc", opt_expr(exc.as_ref())),
            ("cause", opt_expr(cause.as_ref())),
        ],
        Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => vec![
            ("body", stmt_seq(body)),
            (
                "handlers",
                FieldValue::Seq(
                    handlers
                        .iter()
                        .map(|h| FieldValue::Node(NodeRef::ExceptHandler(h)))
                        .collect(),
                ),
            ),
            ("orelse", stmt_seq(orelse)),
            ("finalbody", stmt_seq(finalbody)),
        ],
        Assert { test, msg } => vec![
            ("test", FieldValue::Node(NodeRef::Expr(test))),
            ("msg", opt_expr(msg.as_ref())),
        ],
        Import { names } => vec![("names", alias_seq(names))],
        ImportFrom { module, names } => vec![
            ("module", FieldValue::OptIdent(module.as_deref())),
            ("names", alias_seq(names)),
        ],
        Global { names } | Nonlocal { names } => vec![(
            "names",
            FieldValue::Seq(names.iter().map(|n| FieldValue::Ident(n)).collect()),
        )],
        Expr { value } => vec![("value", FieldValue::Node(NodeRef::Expr(value)))],
        Pass | Break | Continue => vec![],
    }
}

fn expr_fields(expr: &Expr) -> Vec<(&'static str, FieldValue<'_>)> {
    use Expr::*;
    match expr {
        BoolOp { op, values } => vec![
            ("op", FieldValue::Op(op.name())),
            ("values", expr_seq(values)),
        ],
        BinOp { left, op, right } => vec![
            ("left", FieldValue::Node(NodeRef::Expr(left))),
            ("op", FieldValue::Op(op.name())),
            ("right", FieldValue::Node(NodeRef::Expr(right))),
        ],
        UnaryOp { op, operand } => vec![
            ("op", FieldValue::Op(op.name())),
            ("operand", FieldValue::Node(NodeRef::Expr(operand))),
        ],
        Lambda { args, body } => vec![
            ("args", FieldValue::Node(NodeRef::Arguments(args))),
            ("body", FieldValue::Node(NodeRef::Expr(body))),
        ],
        IfExp { test, body, orelse } => vec![
            ("test", FieldValue::Node(NodeRef::Expr(test))),
            ("body", FieldValue::Node(NodeRef::Expr(body))),
            ("orelse", FieldValue::Node(NodeRef::Expr(orelse))),
        ],
        Dict { keys, values } => vec![("keys", expr_seq(keys)), ("values", expr_seq(values))],
        Set { elts } => vec![("elts", expr_seq(elts))],
        ListComp { elt, generators } | SetComp { elt, generators } | GeneratorExp { elt, generators } => {
            vec![
                ("elt", FieldValue::Node(NodeRef::Expr(elt))),
                ("generators", comprehension_seq(generators)),
            ]
        }
        DictComp {
            key,
            value,
            generators,
        } => vec![
            ("key", FieldValue::Node(NodeRef::Expr(key))),
            ("value", FieldValue::Node(NodeRef::Expr(value))),
            ("generators", comprehension_seq(generators)),
        ],
        Yield { value } => vec![("value", opt_expr(value.as_deref()))],
        YieldFrom { value } => vec![("value", FieldValue::Node(NodeRef::Expr(value)))],
        Compare {
            left,
            ops,
            comparators,
        } => vec![
            ("left", FieldValue::Node(NodeRef::Expr(left))),
            (
                "ops",
                FieldValue::Seq(ops.iter().map(|op| FieldValue::Op(op.name())).collect()),
            ),
            ("comparators", expr_seq(comparators)),
        ],
        Call {
            func,
            args,
            keywords,
            starargs,
            kwargs,
        } => vec![
            ("func", FieldValue::Node(NodeRef::Expr(func))),
            ("args", expr_seq(args)),
            ("keywords", keyword_seq(keywords)),
            ("starargs", opt_expr(starargs.as_deref())),
            ("kwargs", opt_expr(kwargs.as_deref())),
        ],
        Num { n } => vec![("n", FieldValue::Num(*n))],
        Str { s } => vec![("s", FieldValue::Ident(s))],
        Bytes { s } => vec![("s", FieldValue::Bytes(s))],
        NameConstant { value } => vec![("value", FieldValue::Singleton(*value))],
        Ellipsis => vec![],
        Attribute { value, attr } => vec![
            ("value", FieldValue::Node(NodeRef::Expr(value))),
            ("attr", FieldValue::Ident(attr)),
        ],
        Subscript { value, slice } => vec![
            ("value", FieldValue::Node(NodeRef::Expr(value))),
            ("slice", FieldValue::Node(NodeRef::Expr(slice))),
        ],
        Starred { value } => vec![("value", FieldValue::Node(NodeRef::Expr(value)))],
        Name { id } => vec![("id", FieldValue::Ident(id))],
        List { elts } | Tuple { elts } => vec![("elts", expr_seq(elts))],
        Slice { lower, upper, step } => vec![
            ("lower", opt_expr(lower.as_deref())),
            ("upper", opt_expr(upper.as_deref())),
            ("step", opt_expr(step.as_deref())),
        ],
    }
}

fn expr_seq(items: &[ExprNode]) -> FieldValue<'_> {
    FieldValue::Seq(items.iter().map(|e| FieldValue::Node(NodeRef::Expr(e))).collect())
}

fn stmt_seq(items: &[StmtNode]) -> FieldValue<'_> {
    FieldValue::Seq(items.iter().map(|s| FieldValue::Node(NodeRef::Stmt(s))).collect())
}

fn arg_seq(items: &[Arg]) -> FieldValue<'_> {
    FieldValue::Seq(items.iter().map(|a| FieldValue::Node(NodeRef::Arg(a))).collect())
}

fn keyword_seq(items: &[Keyword]) -> FieldValue<'_> {
    FieldValue::Seq(items.iter().map(|k| FieldValue::Node(NodeRef::Keyword(k))).collect())
}

fn alias_seq(items: &[Alias]) -> FieldValue<'_> {
    FieldValue::Seq(items.iter().map(|a| FieldValue::Node(NodeRef::Alias(a))).collect())
}

fn comprehension_seq(items: &[Comprehension]) -> FieldValue<'_> {
    FieldValue::Seq(
        items
            .iter()
            .map(|c| FieldValue::Node(NodeRef::Comprehension(c)))
            .collect(),
    )
}

fn opt_expr(value: Option<&ExprNode>) -> FieldValue<'_> {
    FieldValue::OptNode(value.map(NodeRef::Expr))
}
