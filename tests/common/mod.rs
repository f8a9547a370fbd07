// tests/common/mod.rs
//! # Tree builders
//!
//! Shorthand constructors for hand-built trees, so test expectations stay
//! close to the source text they render to.

#![allow(dead_code)]

use ramus::ast::*;
use ramus::to_source;

pub fn module(body: Vec<StmtNode>) -> Module {
    Module { body }
}

/// Renders a statement sequence and returns the full source text.
pub fn render(body: Vec<StmtNode>) -> String {
    to_source(&module(body)).unwrap()
}

/// Renders a single expression as it appears in source.
pub fn expr_source(expression: ExprNode) -> String {
    let source = render(vec![expr_stmt(expression)]);
    source.trim_end().to_string()
}

/// Pins a node to a source position.
pub fn at<T>(mut node: Located<T>, line: u32, column: u32) -> Located<T> {
    node.pos = Pos::new(line, column);
    node
}

// ---
// Expressions
// ---

pub fn name(id: &str) -> ExprNode {
    Expr::Name { id: id.to_string() }.into()
}

pub fn num(n: i64) -> ExprNode {
    Expr::Num { n: Number::Int(n) }.into()
}

pub fn float(n: f64) -> ExprNode {
    Expr::Num {
        n: Number::Float(n),
    }
    .into()
}

pub fn string(s: &str) -> ExprNode {
    Expr::Str { s: s.to_string() }.into()
}

pub fn bytes(s: &[u8]) -> ExprNode {
    Expr::Bytes { s: s.to_vec() }.into()
}

pub fn constant(value: Singleton) -> ExprNode {
    Expr::NameConstant { value }.into()
}

pub fn ellipsis() -> ExprNode {
    Expr::Ellipsis.into()
}

pub fn bin(left: ExprNode, op: Operator, right: ExprNode) -> ExprNode {
    Expr::BinOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
    .into()
}

pub fn unary(op: UnaryOperator, operand: ExprNode) -> ExprNode {
    Expr::UnaryOp {
        op,
        operand: Box::new(operand),
    }
    .into()
}

pub fn boolop(op: BoolOperator, values: Vec<ExprNode>) -> ExprNode {
    Expr::BoolOp { op, values }.into()
}

pub fn compare(left: ExprNode, pairs: Vec<(CmpOperator, ExprNode)>) -> ExprNode {
    let (ops, comparators) = pairs.into_iter().unzip();
    Expr::Compare {
        left: Box::new(left),
        ops,
        comparators,
    }
    .into()
}

pub fn call(func: ExprNode, args: Vec<ExprNode>) -> ExprNode {
    call_full(func, args, vec![], None, None)
}

pub fn call_full(
    func: ExprNode,
    args: Vec<ExprNode>,
    keywords: Vec<Keyword>,
    starargs: Option<ExprNode>,
    kwargs: Option<ExprNode>,
) -> ExprNode {
    Expr::Call {
        func: Box::new(func),
        args,
        keywords,
        starargs: starargs.map(Box::new),
        kwargs: kwargs.map(Box::new),
    }
    .into()
}

pub fn keyword(arg: &str, value: ExprNode) -> Keyword {
    Keyword {
        arg: arg.to_string(),
        value,
    }
}

pub fn attr(value: ExprNode, attr: &str) -> ExprNode {
    Expr::Attribute {
        value: Box::new(value),
        attr: attr.to_string(),
    }
    .into()
}

pub fn subscript(value: ExprNode, index: ExprNode) -> ExprNode {
    Expr::Subscript {
        value: Box::new(value),
        slice: Box::new(index),
    }
    .into()
}

pub fn slice(
    lower: Option<ExprNode>,
    upper: Option<ExprNode>,
    step: Option<ExprNode>,
) -> ExprNode {
    Expr::Slice {
        lower: lower.map(Box::new),
        upper: upper.map(Box::new),
        step: step.map(Box::new),
    }
    .into()
}

pub fn starred(value: ExprNode) -> ExprNode {
    Expr::Starred {
        value: Box::new(value),
    }
    .into()
}

pub fn tuple(elts: Vec<ExprNode>) -> ExprNode {
    Expr::Tuple { elts }.into()
}

pub fn list(elts: Vec<ExprNode>) -> ExprNode {
    Expr::List { elts }.into()
}

pub fn set(elts: Vec<ExprNode>) -> ExprNode {
    Expr::Set { elts }.into()
}

pub fn dict(entries: Vec<(ExprNode, ExprNode)>) -> ExprNode {
    let (keys, values) = entries.into_iter().unzip();
    Expr::Dict { keys, values }.into()
}

pub fn comp(target: ExprNode, iter: ExprNode, ifs: Vec<ExprNode>) -> Comprehension {
    Comprehension { target, iter, ifs }
}

pub fn list_comp(elt: ExprNode, generators: Vec<Comprehension>) -> ExprNode {
    Expr::ListComp {
        elt: Box::new(elt),
        generators,
    }
    .into()
}

pub fn set_comp(elt: ExprNode, generators: Vec<Comprehension>) -> ExprNode {
    Expr::SetComp {
        elt: Box::new(elt),
        generators,
    }
    .into()
}

pub fn dict_comp(key: ExprNode, value: ExprNode, generators: Vec<Comprehension>) -> ExprNode {
    Expr::DictComp {
        key: Box::new(key),
        value: Box::new(value),
        generators,
    }
    .into()
}

pub fn generator_exp(elt: ExprNode, generators: Vec<Comprehension>) -> ExprNode {
    Expr::GeneratorExp {
        elt: Box::new(elt),
        generators,
    }
    .into()
}

pub fn lambda(args: Arguments, body: ExprNode) -> ExprNode {
    Expr::Lambda {
        args: Box::new(args),
        body: Box::new(body),
    }
    .into()
}

pub fn if_exp(test: ExprNode, body: ExprNode, orelse: ExprNode) -> ExprNode {
    Expr::IfExp {
        test: Box::new(test),
        body: Box::new(body),
        orelse: Box::new(orelse),
    }
    .into()
}

pub fn yield_expr(value: Option<ExprNode>) -> ExprNode {
    Expr::Yield {
        value: value.map(Box::new),
    }
    .into()
}

pub fn yield_from(value: ExprNode) -> ExprNode {
    Expr::YieldFrom {
        value: Box::new(value),
    }
    .into()
}

// ---
// Parameter lists
// ---

pub fn no_params() -> Arguments {
    Arguments::default()
}

pub fn param(name: &str) -> Arg {
    Arg {
        arg: name.to_string(),
        annotation: None,
    }
}

pub fn param_ann(name: &str, annotation: ExprNode) -> Arg {
    Arg {
        arg: name.to_string(),
        annotation: Some(annotation),
    }
}

/// Positional parameters without defaults.
pub fn params(names: &[&str]) -> Arguments {
    Arguments {
        args: names.iter().map(|name| param(name)).collect(),
        ..Arguments::default()
    }
}

// ---
// Statements
// ---

pub fn expr_stmt(value: ExprNode) -> StmtNode {
    Stmt::Expr { value }.into()
}

pub fn pass_stmt() -> StmtNode {
    Stmt::Pass.into()
}

pub fn break_stmt() -> StmtNode {
    Stmt::Break.into()
}

pub fn continue_stmt() -> StmtNode {
    Stmt::Continue.into()
}

pub fn return_stmt(value: Option<ExprNode>) -> StmtNode {
    Stmt::Return { value }.into()
}

pub fn assign(targets: Vec<ExprNode>, value: ExprNode) -> StmtNode {
    Stmt::Assign { targets, value }.into()
}

pub fn aug_assign(target: ExprNode, op: Operator, value: ExprNode) -> StmtNode {
    Stmt::AugAssign { target, op, value }.into()
}

pub fn delete(targets: Vec<ExprNode>) -> StmtNode {
    Stmt::Delete { targets }.into()
}

pub fn global_stmt(names: &[&str]) -> StmtNode {
    Stmt::Global {
        names: names.iter().map(|name| name.to_string()).collect(),
    }
    .into()
}

pub fn nonlocal_stmt(names: &[&str]) -> StmtNode {
    Stmt::Nonlocal {
        names: names.iter().map(|name| name.to_string()).collect(),
    }
    .into()
}

pub fn alias(name: &str, asname: Option<&str>) -> Alias {
    Alias {
        name: name.to_string(),
        asname: asname.map(|asname| asname.to_string()),
    }
}

pub fn import(names: Vec<Alias>) -> StmtNode {
    Stmt::Import { names }.into()
}

pub fn import_from(module: Option<&str>, names: Vec<Alias>) -> StmtNode {
    Stmt::ImportFrom {
        module: module.map(|module| module.to_string()),
        names,
    }
    .into()
}

pub fn assert_stmt(test: ExprNode, msg: Option<ExprNode>) -> StmtNode {
    Stmt::Assert { test, msg }.into()
}

pub fn raise_stmt(exc: Option<ExprNode>, cause: Option<ExprNode>) -> StmtNode {
    Stmt::Raise { exc, cause }.into()
}

pub fn for_stmt(
    target: ExprNode,
    iter: ExprNode,
    body: Vec<StmtNode>,
    orelse: Vec<StmtNode>,
) -> StmtNode {
    Stmt::For {
        target,
        iter,
        body,
        orelse,
    }
    .into()
}

pub fn while_stmt(test: ExprNode, body: Vec<StmtNode>, orelse: Vec<StmtNode>) -> StmtNode {
    Stmt::While { test, body, orelse }.into()
}

pub fn if_stmt(test: ExprNode, body: Vec<StmtNode>, orelse: Vec<StmtNode>) -> StmtNode {
    Stmt::If { test, body, orelse }.into()
}

pub fn with_item(context_expr: ExprNode, optional_vars: Option<ExprNode>) -> WithItem {
    WithItem {
        context_expr,
        optional_vars,
    }
}

pub fn with_stmt(items: Vec<WithItem>, body: Vec<StmtNode>) -> StmtNode {
    Stmt::With { items, body }.into()
}

pub fn handler(typ: Option<ExprNode>, name: Option<&str>, body: Vec<StmtNode>) -> ExceptHandler {
    ExceptHandler {
        typ,
        name: name.map(|name| name.to_string()),
        body,
    }
}

pub fn try_stmt(
    body: Vec<StmtNode>,
    handlers: Vec<ExceptHandler>,
    orelse: Vec<StmtNode>,
    finalbody: Vec<StmtNode>,
) -> StmtNode {
    Stmt::Try {
        body,
        handlers,
        orelse,
        finalbody,
    }
    .into()
}

pub fn func_def(name: &str, args: Arguments, body: Vec<StmtNode>) -> StmtNode {
    func_def_full(name, args, body, vec![], None)
}

pub fn func_def_full(
    name: &str,
    args: Arguments,
    body: Vec<StmtNode>,
    decorator_list: Vec<ExprNode>,
    returns: Option<ExprNode>,
) -> StmtNode {
    Stmt::FunctionDef {
        name: name.to_string(),
        args,
        body,
        decorator_list,
        returns,
    }
    .into()
}

pub fn class_def(name: &str, bases: Vec<ExprNode>, body: Vec<StmtNode>) -> StmtNode {
    class_def_full(name, bases, vec![], None, None, body, vec![])
}

pub fn class_def_full(
    name: &str,
    bases: Vec<ExprNode>,
    keywords: Vec<Keyword>,
    starargs: Option<ExprNode>,
    kwargs: Option<ExprNode>,
    body: Vec<StmtNode>,
    decorator_list: Vec<ExprNode>,
) -> StmtNode {
    Stmt::ClassDef {
        name: name.to_string(),
        bases,
        keywords,
        starargs,
        kwargs,
        body,
        decorator_list,
    }
    .into()
}
