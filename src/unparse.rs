//! Source rendering rules.
//!
//! Every statement and expression kind has one rendering rule; the rules
//! recurse through the precedence model to decide parenthesization and drive
//! the writer for layout. The entry point is [`to_source`].

use crate::ast::{
    Alias, Arg, Arguments, Comprehension, ExceptHandler, Expr, ExprNode, Keyword, Module,
    Operator, Stmt, StmtNode, WithItem,
};
use crate::errors::UnparseError;
use crate::precedence::{self, OpIdentity};
use crate::writer::SourceWriter;

/// Renders a module as canonical source text.
///
/// The output is syntactically valid and parses back to a structurally equal
/// tree; original formatting, comments, and literal spellings are not
/// preserved.
pub fn to_source(module: &Module) -> Result<String, UnparseError> {
    let mut writer = SourceWriter::new();
    suite(&mut writer, &module.body)?;
    Ok(writer.into_string())
}

/// Renders a statement sequence, separating function and class definitions
/// from a following statement with one blank line.
fn suite(w: &mut SourceWriter, statements: &[StmtNode]) -> Result<(), UnparseError> {
    let (last, init) = match statements.split_last() {
        Some(pair) => pair,
        None => return Ok(()),
    };
    for statement in init {
        stmt(w, statement)?;
        if matches!(
            statement.node,
            Stmt::FunctionDef { .. } | Stmt::ClassDef { .. }
        ) {
            w.write_newline();
        }
    }
    stmt(w, last)
}

/// Renders a block body one level deeper, restoring the depth on every exit
/// path.
fn indented_body(w: &mut SourceWriter, body: &[StmtNode]) -> Result<(), UnparseError> {
    w.indent();
    let result = suite(w, body);
    w.dedent();
    result
}

fn stmt(w: &mut SourceWriter, statement: &StmtNode) -> Result<(), UnparseError> {
    match &statement.node {
        Stmt::FunctionDef {
            name,
            args,
            body,
            decorator_list,
            returns,
        } => {
            decorators(w, decorator_list)?;
            w.write("def ");
            w.write(name);
            w.write("(");
            arguments(w, args)?;
            w.write(")");
            if let Some(annotation) = returns {
                w.write(" -> ");
                expr(w, annotation)?;
            }
            w.write(":");
            w.write_newline();
            indented_body(w, body)
        }
        Stmt::ClassDef {
            name,
            bases,
            keywords,
            starargs,
            kwargs,
            body,
            decorator_list,
        } => {
            decorators(w, decorator_list)?;
            w.write("class ");
            w.write(name);
            if !bases.is_empty() || !keywords.is_empty() || starargs.is_some() || kwargs.is_some()
            {
                w.write("(");
                w.comma_join(bases, expr)?;
                if !keywords.is_empty() {
                    if !bases.is_empty() {
                        w.write(", ");
                    }
                    w.comma_join(keywords, keyword)?;
                }
                if let Some(star) = starargs {
                    if !bases.is_empty() || !keywords.is_empty() {
                        w.write(", ");
                    }
                    w.write("*");
                    expr(w, star)?;
                }
                if let Some(kw) = kwargs {
                    if !bases.is_empty() || !keywords.is_empty() || starargs.is_some() {
                        w.write(", ");
                    }
                    w.write("**");
                    expr(w, kw)?;
                }
                w.write(")");
            }
            w.write(":");
            w.write_newline();
            indented_body(w, body)
        }
        Stmt::Return { value } => {
            w.write("return");
            if let Some(value) = value {
                w.write(" ");
                expr(w, value)?;
            }
            w.write_newline();
            Ok(())
        }
        Stmt::Delete { targets } => {
            w.write("del ");
            w.comma_join(targets, expr)?;
            w.write_newline();
            Ok(())
        }
        Stmt::Assign { targets, value } => {
            for target in targets {
                expr(w, target)?;
                w.write(" = ");
            }
            expr(w, value)?;
            w.write_newline();
            Ok(())
        }
        Stmt::AugAssign { target, op, value } => {
            expr(w, target)?;
            w.write(" ");
            w.write(op.token());
            w.write("= ");
            expr(w, value)?;
            w.write_newline();
            Ok(())
        }
        Stmt::For {
            target,
            iter,
            body,
            orelse,
        } => {
            w.write("for ");
            expr(w, target)?;
            w.write(" in ");
            expr(w, iter)?;
            w.write(":");
            w.write_newline();
            indented_body(w, body)?;
            else_block(w, orelse)
        }
        Stmt::While { test, body, orelse } => {
            w.write("while ");
            expr(w, test)?;
            w.write(":");
            w.write_newline();
            indented_body(w, body)?;
            else_block(w, orelse)
        }
        Stmt::If { test, body, orelse } => {
            w.write("if ");
            expr(w, test)?;
            w.write(":");
            w.write_newline();
            indented_body(w, body)?;
            else_block(w, orelse)
        }
        Stmt::With { items, body } => {
            w.write("with ");
            w.comma_join(items, with_item)?;
            w.write(":");
            w.write_newline();
            indented_body(w, body)
        }
        Stmt::Raise { exc, cause } => {
            w.write("raise");
            if let Some(exc) = exc {
                w.write(" ");
                expr(w, exc)?;
            }
            if let Some(cause) = cause {
                w.write(" from ");
                expr(w, cause)?;
            }
            w.write_newline();
            Ok(())
        }
        Stmt::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => {
            w.write_line("try:");
            indented_body(w, body)?;
            for handler in handlers {
                except_handler(w, handler)?;
            }
            else_block(w, orelse)?;
            if !finalbody.is_empty() {
                w.write_line("finally:");
                indented_body(w, finalbody)?;
            }
            Ok(())
        }
        Stmt::Assert { test, msg } => {
            w.write("assert ");
            expr(w, test)?;
            if let Some(msg) = msg {
                w.write(", ");
                expr(w, msg)?;
            }
            w.write_newline();
            Ok(())
        }
        Stmt::Import { names } => {
            w.write("import ");
            w.comma_join(names, alias)?;
            w.write_newline();
            Ok(())
        }
        Stmt::ImportFrom { module, names } => {
            w.write("from ");
            match module {
                Some(module) => w.write(module),
                None => w.write("."),
            }
            w.write(" import ");
            w.comma_join(names, alias)?;
            w.write_newline();
            Ok(())
        }
        Stmt::Global { names } => {
            w.write("global ");
            identifier_list(w, names)
        }
        Stmt::Nonlocal { names } => {
            w.write("nonlocal ");
            identifier_list(w, names)
        }
        Stmt::Expr { value } => {
            expr(w, value)?;
            w.write_newline();
            Ok(())
        }
        Stmt::Pass => {
            w.write_line("pass");
            Ok(())
        }
        Stmt::Break => {
            w.write_line("break");
            Ok(())
        }
        Stmt::Continue => {
            w.write_line("continue");
            Ok(())
        }
    }
}

fn decorators(w: &mut SourceWriter, decorator_list: &[ExprNode]) -> Result<(), UnparseError> {
    for decorator in decorator_list {
        w.write("@");
        expr(w, decorator)?;
        w.write_newline();
    }
    Ok(())
}

fn else_block(w: &mut SourceWriter, orelse: &[StmtNode]) -> Result<(), UnparseError> {
    if !orelse.is_empty() {
        w.write_line("else:");
        indented_body(w, orelse)?;
    }
    Ok(())
}

fn identifier_list(w: &mut SourceWriter, names: &[String]) -> Result<(), UnparseError> {
    w.comma_join(names, |w, name| {
        w.write(name);
        Ok::<_, UnparseError>(())
    })?;
    w.write_newline();
    Ok(())
}

fn expr(w: &mut SourceWriter, expression: &ExprNode) -> Result<(), UnparseError> {
    use Expr::*;
    match &expression.node {
        BoolOp { op, values } => {
            let parent = OpIdentity::from(*op);
            let mut first = true;
            for value in values {
                if !first {
                    w.write(" ");
                    w.write(op.token());
                    w.write(" ");
                }
                paren_if(w, precedence::requires_parentheses(parent, &value.node), value)?;
                first = false;
            }
            Ok(())
        }
        BinOp { left, op, right } => {
            let parent = OpIdentity::from(*op);
            // A literal negative number on the left would merge its sign
            // with the operator token.
            let negative_literal = matches!(&left.node, Num { n } if n.is_negative());
            paren_if(
                w,
                negative_literal || precedence::requires_parentheses(parent, &left.node),
                left,
            )?;
            w.write(" ");
            w.write(op.token());
            w.write(" ");
            // Exponentiation is right-associative: the right operand is
            // looked up against the multiplicative tier so a ** b ** c and
            // a ** -b stay bare.
            let right_parent = if *op == Operator::Pow {
                OpIdentity::from(Operator::Mult)
            } else {
                parent
            };
            paren_if(
                w,
                precedence::requires_parentheses(right_parent, &right.node),
                right,
            )
        }
        UnaryOp { op, operand } => {
            w.write(op.token());
            paren_if(
                w,
                precedence::requires_parentheses((*op).into(), &operand.node),
                operand,
            )
        }
        Lambda { args, body } => {
            w.write("lambda ");
            arguments(w, args)?;
            w.write(": ");
            expr(w, body)
        }
        IfExp { test, body, orelse } => {
            paren_if(
                w,
                precedence::requires_parentheses(OpIdentity::IfExp, &body.node),
                body,
            )?;
            w.write(" if ");
            paren_if(
                w,
                precedence::requires_parentheses(OpIdentity::IfExp, &test.node),
                test,
            )?;
            w.write(" else ");
            expr(w, orelse)
        }
        Dict { keys, values } => {
            w.write("{");
            let entries: Vec<_> = keys.iter().zip(values.iter()).collect();
            w.comma_join(&entries, |w, &(key, value)| {
                expr(w, key)?;
                w.write(": ");
                expr(w, value)
            })?;
            w.write("}");
            Ok(())
        }
        Set { elts } => {
            w.write("{");
            w.comma_join(elts, expr)?;
            w.write("}");
            Ok(())
        }
        ListComp { elt, generators } => {
            w.write("[");
            expr(w, elt)?;
            comprehensions(w, generators)?;
            w.write("]");
            Ok(())
        }
        SetComp { elt, generators } => {
            w.write("{");
            expr(w, elt)?;
            comprehensions(w, generators)?;
            w.write("}");
            Ok(())
        }
        DictComp {
            key,
            value,
            generators,
        } => {
            w.write("{");
            expr(w, key)?;
            w.write(": ");
            expr(w, value)?;
            comprehensions(w, generators)?;
            w.write("}");
            Ok(())
        }
        GeneratorExp { elt, generators } => {
            w.write("(");
            expr(w, elt)?;
            comprehensions(w, generators)?;
            w.write(")");
            Ok(())
        }
        Yield { value } => {
            w.write("yield");
            if let Some(value) = value {
                w.write(" ");
                expr(w, value)?;
            }
            Ok(())
        }
        YieldFrom { value } => {
            w.write("yield from ");
            expr(w, value)
        }
        Compare {
            left,
            ops,
            comparators,
        } => {
            expr(w, left)?;
            for (op, comparator) in ops.iter().zip(comparators.iter()) {
                w.write(" ");
                w.write(op.token());
                w.write(" ");
                expr(w, comparator)?;
            }
            Ok(())
        }
        Call {
            func,
            args,
            keywords,
            starargs,
            kwargs,
        } => {
            paren_if(
                w,
                precedence::requires_parentheses(OpIdentity::Call, &func.node),
                func,
            )?;
            w.write("(");
            w.comma_join(args, expr)?;
            if !keywords.is_empty() {
                if !args.is_empty() {
                    w.write(", ");
                }
                w.comma_join(keywords, keyword)?;
            }
            if let Some(star) = starargs {
                if !args.is_empty() || !keywords.is_empty() {
                    w.write(", ");
                }
                w.write("*");
                expr(w, star)?;
            }
            if let Some(kw) = kwargs {
                if !args.is_empty() || !keywords.is_empty() || starargs.is_some() {
                    w.write(", ");
                }
                w.write("**");
                expr(w, kw)?;
            }
            w.write(")");
            Ok(())
        }
        Num { n } => {
            w.write(&n.to_string());
            Ok(())
        }
        Str { s } => {
            w.write(&str_literal(s));
            Ok(())
        }
        Bytes { s } => {
            w.write(&bytes_literal(s));
            Ok(())
        }
        NameConstant { value } => {
            w.write(value.as_str());
            Ok(())
        }
        Ellipsis => {
            w.write("...");
            Ok(())
        }
        Attribute { value, attr } => {
            let parens = precedence::requires_parentheses(OpIdentity::Attribute, &value.node)
                && !matches!(value.node, Attribute { .. });
            paren_if(w, parens, value)?;
            w.write(".");
            w.write(attr);
            Ok(())
        }
        Subscript { value, slice } => {
            let parens = precedence::requires_parentheses(OpIdentity::Subscript, &value.node)
                && !matches!(value.node, Subscript { .. });
            paren_if(w, parens, value)?;
            w.write("[");
            subscript_index(w, slice)?;
            w.write("]");
            Ok(())
        }
        Starred { value } => {
            w.write("*");
            expr(w, value)
        }
        Name { id } => {
            w.write(id);
            Ok(())
        }
        List { elts } => {
            w.write("[");
            w.comma_join(elts, expr)?;
            w.write("]");
            Ok(())
        }
        Tuple { elts } => w.comma_join(elts, expr),
        Slice { .. } => Err(UnparseError::UnsupportedNode {
            kind: expression.node.kind(),
        }),
    }
}

fn paren_if(w: &mut SourceWriter, parens: bool, value: &ExprNode) -> Result<(), UnparseError> {
    if parens {
        w.write("(");
        expr(w, value)?;
        w.write(")");
        Ok(())
    } else {
        expr(w, value)
    }
}

/// Renders the index of a subscript; the colon forms of a slice exist only
/// here.
fn subscript_index(w: &mut SourceWriter, index: &ExprNode) -> Result<(), UnparseError> {
    let (lower, upper, step) = match &index.node {
        Expr::Slice { lower, upper, step } => (lower, upper, step),
        _ => return expr(w, index),
    };
    if let Some(lower) = lower {
        expr(w, lower)?;
        w.write(":");
    }
    if let Some(upper) = upper {
        if lower.is_none() {
            w.write(":");
        }
        expr(w, upper)?;
    }
    if let Some(step) = step {
        if lower.is_none() && upper.is_none() {
            w.write("::");
        } else {
            w.write(":");
        }
        expr(w, step)?;
    }
    if lower.is_none() && upper.is_none() && step.is_none() {
        w.write(":");
    }
    Ok(())
}

/// Renders a parameter list with presence-aware comma separation.
fn arguments(w: &mut SourceWriter, args: &Arguments) -> Result<(), UnparseError> {
    // Defaults align with the tail of the positional parameters.
    let split = args.args.len().saturating_sub(args.defaults.len());
    let (plain, defaulted) = args.args.split_at(split);
    let mut first = true;

    for parameter in plain {
        separate(w, &mut first);
        arg(w, parameter)?;
    }
    for (parameter, default) in defaulted.iter().zip(args.defaults.iter()) {
        separate(w, &mut first);
        arg(w, parameter)?;
        w.write("=");
        expr(w, default)?;
    }
    if let Some(vararg) = &args.vararg {
        separate(w, &mut first);
        w.write("*");
        w.write(vararg);
    }
    if !args.kwonlyargs.is_empty() {
        if args.vararg.is_none() {
            separate(w, &mut first);
            w.write("*");
        }
        for (parameter, default) in args.kwonlyargs.iter().zip(args.kw_defaults.iter()) {
            separate(w, &mut first);
            arg(w, parameter)?;
            if let Some(default) = default {
                w.write("=");
                expr(w, default)?;
            }
        }
    }
    if let Some(kwarg) = &args.kwarg {
        separate(w, &mut first);
        w.write("**");
        w.write(kwarg);
    }
    Ok(())
}

fn separate(w: &mut SourceWriter, first: &mut bool) {
    if !*first {
        w.write(", ");
    }
    *first = false;
}

fn arg(w: &mut SourceWriter, parameter: &Arg) -> Result<(), UnparseError> {
    w.write(&parameter.arg);
    if let Some(annotation) = &parameter.annotation {
        w.write(": ");
        expr(w, annotation)?;
    }
    Ok(())
}

fn keyword(w: &mut SourceWriter, keyword: &Keyword) -> Result<(), UnparseError> {
    w.write(&keyword.arg);
    w.write("=");
    expr(w, &keyword.value)
}

fn alias(w: &mut SourceWriter, alias: &Alias) -> Result<(), UnparseError> {
    w.write(&alias.name);
    if let Some(asname) = &alias.asname {
        w.write(" as ");
        w.write(asname);
    }
    Ok(())
}

fn comprehensions(w: &mut SourceWriter, generators: &[Comprehension]) -> Result<(), UnparseError> {
    for clause in generators {
        w.write(" for ");
        expr(w, &clause.target)?;
        w.write(" in ");
        expr(w, &clause.iter)?;
        for filter in &clause.ifs {
            w.write(" if ");
            expr(w, filter)?;
        }
    }
    Ok(())
}

fn except_handler(w: &mut SourceWriter, handler: &ExceptHandler) -> Result<(), UnparseError> {
    w.write("except");
    if let Some(typ) = &handler.typ {
        w.write(" ");
        expr(w, typ)?;
    }
    if let Some(name) = &handler.name {
        w.write(" as ");
        w.write(name);
    }
    w.write(":");
    w.write_newline();
    indented_body(w, &handler.body)
}

fn with_item(w: &mut SourceWriter, item: &WithItem) -> Result<(), UnparseError> {
    expr(w, &item.context_expr)?;
    if let Some(vars) = &item.optional_vars {
        w.write(" as ");
        expr(w, vars)?;
    }
    Ok(())
}

/// Renders a text literal in canonical single-quoted form.
fn str_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            ch if (ch as u32) < 0x20 => literal.push_str(&format!("\\x{:02x}", ch as u32)),
            ch => literal.push(ch),
        }
    }
    literal.push('\'');
    literal
}

/// Renders a byte-string literal; also used by the structural dumper.
pub(crate) fn bytes_literal(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() + 3);
    literal.push_str("b'");
    for &byte in bytes {
        match byte {
            b'\\' => literal.push_str("\\\\"),
            b'\'' => literal.push_str("\\'"),
            b'\n' => literal.push_str("\\n"),
            b'\r' => literal.push_str("\\r"),
            b'\t' => literal.push_str("\\t"),
            0x20..=0x7e => literal.push(byte as char),
            _ => literal.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    literal.push('\'');
    literal
}
