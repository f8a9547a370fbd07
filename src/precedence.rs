//! Operator precedence for parenthesization decisions.
//!
//! The tower below orders operator and construct identities from loosest to
//! tightest binding. A child operand needs parentheses when its identity
//! binds no more tightly than its parent's. Kinds absent from the tower
//! (names, literals, comparison chains, yields, starred and generator
//! expressions) carry their own delimiters or render flat and never require
//! parentheses as children.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ast::{BoolOperator, Expr, Operator, UnaryOperator};

/// Precedence-lookup identity of an expression: operator-carrying nodes are
/// identified by their operator tag, everything else by its kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum OpIdentity {
    Lambda,
    IfExp,
    Or,
    And,
    Not,
    In,
    NotIn,
    Is,
    IsNot,
    Lt,
    LtE,
    Gt,
    GtE,
    NotEq,
    Eq,
    BitOr,
    BitXor,
    BitAnd,
    LShift,
    RShift,
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    UAdd,
    USub,
    Invert,
    Pow,
    Subscript,
    Call,
    Attribute,
    Tuple,
    List,
    Dict,
    Set,
    ListComp,
    DictComp,
    SetComp,
}

use OpIdentity::*;

/// Tiers from loosest to tightest binding.
static TOWER: &[&[OpIdentity]] = &[
    &[Lambda],
    &[IfExp],
    &[Or],
    &[And],
    &[Not],
    &[In, NotIn, Is, IsNot, Lt, LtE, Gt, GtE, NotEq, Eq],
    &[BitOr],
    &[BitXor],
    &[BitAnd],
    &[LShift, RShift],
    &[Add, Sub],
    &[Mult, Div, FloorDiv, Mod],
    &[UAdd, USub, Invert],
    &[Pow],
    &[Subscript, Call, Attribute],
    &[Tuple, List, Dict, Set, ListComp, DictComp, SetComp],
];

static TIER_INDEX: Lazy<HashMap<OpIdentity, usize>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (tier, members) in TOWER.iter().enumerate() {
        for &member in *members {
            index.insert(member, tier);
        }
    }
    index
});

impl From<BoolOperator> for OpIdentity {
    fn from(op: BoolOperator) -> Self {
        match op {
            BoolOperator::And => And,
            BoolOperator::Or => Or,
        }
    }
}

impl From<Operator> for OpIdentity {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Add,
            Operator::Sub => Sub,
            Operator::Mult => Mult,
            Operator::Div => Div,
            Operator::Mod => Mod,
            Operator::Pow => Pow,
            Operator::LShift => LShift,
            Operator::RShift => RShift,
            Operator::BitOr => BitOr,
            Operator::BitXor => BitXor,
            Operator::BitAnd => BitAnd,
            Operator::FloorDiv => FloorDiv,
        }
    }
}

impl From<UnaryOperator> for OpIdentity {
    fn from(op: UnaryOperator) -> Self {
        match op {
            UnaryOperator::Invert => Invert,
            UnaryOperator::Not => Not,
            UnaryOperator::UAdd => UAdd,
            UnaryOperator::USub => USub,
        }
    }
}

/// Returns the identity of an expression, or `None` for kinds outside the
/// tower.
pub(crate) fn identity(expr: &Expr) -> Option<OpIdentity> {
    match expr {
        Expr::BoolOp { op, .. } => Some((*op).into()),
        Expr::BinOp { op, .. } => Some((*op).into()),
        Expr::UnaryOp { op, .. } => Some((*op).into()),
        Expr::Lambda { .. } => Some(Lambda),
        Expr::IfExp { .. } => Some(IfExp),
        Expr::Call { .. } => Some(Call),
        Expr::Subscript { .. } => Some(Subscript),
        Expr::Attribute { .. } => Some(Attribute),
        Expr::Tuple { .. } => Some(Tuple),
        Expr::List { .. } => Some(List),
        Expr::Dict { .. } => Some(Dict),
        Expr::Set { .. } => Some(Set),
        Expr::ListComp { .. } => Some(ListComp),
        Expr::DictComp { .. } => Some(DictComp),
        Expr::SetComp { .. } => Some(SetComp),
        _ => None,
    }
}

/// Returns true if `child` must be parenthesized when rendered as an operand
/// of `parent`.
pub(crate) fn requires_parentheses(parent: OpIdentity, child: &Expr) -> bool {
    let child = match identity(child) {
        Some(id) => id,
        None => return false,
    };
    match (tier(parent), tier(child)) {
        (Some(parent), Some(child)) => child <= parent,
        _ => false,
    }
}

fn tier(id: OpIdentity) -> Option<usize> {
    TIER_INDEX.get(&id).copied()
}
