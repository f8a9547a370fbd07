// tests/dump_tests.rs

mod common;

use common::*;
use indoc::indoc;

use ramus::ast::{Module, Operator, Singleton};
use ramus::{dump, DumpOptions};

/// The tree for `spam(eggs, 'and cheese')`, with recorded positions.
fn sample_call() -> Module {
    module(vec![at(
        expr_stmt(at(
            call(
                at(name("spam"), 1, 0),
                vec![at(name("eggs"), 1, 5), at(string("and cheese"), 1, 11)],
            ),
            1,
            0,
        )),
        1,
        0,
    )])
}

#[test]
fn test_dump_annotates_fields_by_default() {
    let tree = sample_call();
    assert_eq!(
        dump(&tree, DumpOptions::default()),
        indoc! {r#"
            Module(body=[
                Expr(value=Call(func=Name(id="spam"), args=[
                    Name(id="eggs"),
                    Str(s="and cheese"),
                    ], keywords=[], starargs=None, kwargs=None)),
                ])"#}
    );
}

#[test]
fn test_dump_without_field_names() {
    let tree = sample_call();
    let options = DumpOptions {
        annotate_fields: false,
        ..DumpOptions::default()
    };
    assert_eq!(
        dump(&tree, options),
        indoc! {r#"
            Module([
                Expr(Call(Name("spam"), [
                    Name("eggs"),
                    Str("and cheese"),
                    ], [], None, None)),
                ])"#}
    );
}

#[test]
fn test_dump_with_positions() {
    let tree = sample_call();
    let options = DumpOptions {
        include_positions: true,
        ..DumpOptions::default()
    };
    assert_eq!(
        dump(&tree, options),
        indoc! {r#"
            Module(body=[
                Expr(value=Call(func=Name(id="spam", line=1, column=0), args=[
                    Name(id="eggs", line=1, column=5),
                    Str(s="and cheese", line=1, column=11),
                    ], keywords=[], starargs=None, kwargs=None, line=1, column=0), line=1, column=0),
                ])"#}
    );
}

#[test]
fn test_dump_positions_lose_their_names_too() {
    let expression = at(name("spam"), 1, 0);
    let options = DumpOptions {
        annotate_fields: false,
        include_positions: true,
    };
    assert_eq!(dump(&expression, options), r#"Name("spam", 1, 0)"#);
}

#[test]
fn test_dump_operator_tags_render_as_constructors() {
    let tree = bin(num(1), Operator::Add, num(2));
    assert_eq!(
        dump(&tree, DumpOptions::default()),
        "BinOp(left=Num(n=1), op=Add(), right=Num(n=2))"
    );
}

#[test]
fn test_dump_scalar_fields() {
    assert_eq!(dump(&float(1.5), DumpOptions::default()), "Num(n=1.5)");
    assert_eq!(
        dump(&bytes(b"\x00ab"), DumpOptions::default()),
        r"Bytes(s=b'\x00ab')"
    );
    assert_eq!(
        dump(&constant(Singleton::True), DumpOptions::default()),
        "NameConstant(value=True)"
    );
    assert_eq!(dump(&ellipsis(), DumpOptions::default()), "Ellipsis()");
}

#[test]
fn test_dump_parameter_lists() {
    assert_eq!(
        dump(&no_params(), DumpOptions::default()),
        "arguments(args=[], vararg=None, kwonlyargs=[], kw_defaults=[], kwarg=None, defaults=[])"
    );
}

#[test]
fn test_dump_optional_identifier_fields() {
    let tree = import(vec![alias("spam", Some("eggs"))]);
    assert_eq!(
        dump(&tree, DumpOptions::default()),
        indoc! {r#"
            Import(names=[
                alias(name="spam", asname="eggs"),
                ])"#}
    );
    let tree = import_from(None, vec![alias("foo", None)]);
    assert_eq!(
        dump(&tree, DumpOptions::default()),
        indoc! {r#"
            ImportFrom(module=None, names=[
                alias(name="foo", asname=None),
                ])"#}
    );
}
