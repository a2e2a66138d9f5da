use super::{Stats, Var};
use crate::lang::ast::{Comparison, Expression, Ident, Statement};

const INDENT: &str = "    ";

/// ## Syntax tree rendering
///
/// Developer facing text only. Nothing here is used for execution.
/// Expression trees print breadth first: a level's nodes, then the next
/// level one indent deeper.
pub struct Tree {}

impl Tree {
    /// One line per level, nodes separated by a space.
    pub fn level_order(expr: &Expression) -> String {
        let mut s = String::new();
        for level in levels(expr) {
            let labels: Vec<String> = level.iter().map(|e| e.to_string()).collect();
            s.push_str(&labels.join(" "));
            s.push('\n');
        }
        s
    }

    /// One node per line, indented by `offset` plus the node's depth.
    pub fn indented(expr: &Expression, offset: usize) -> String {
        render_expression(expr, offset, None)
    }

    /// Like `indented` with each variable followed by its usage count.
    pub fn indented_with_usage(expr: &Expression, offset: usize, var: &Var) -> String {
        render_expression(expr, offset, Some(var))
    }

    pub fn statement(number: u32, statement: &Statement) -> String {
        render_statement(number, statement, None)
    }

    /// Headers carry the run count (IF carries true and false counts).
    pub fn statement_with_statistics(
        number: u32,
        statement: &Statement,
        stats: Stats,
        var: &Var,
    ) -> String {
        render_statement(number, statement, Some((stats, var)))
    }
}

fn levels(expr: &Expression) -> Vec<Vec<&Expression>> {
    let mut levels = vec![];
    let mut current = vec![expr];
    while !current.is_empty() {
        let next: Vec<&Expression> = current
            .iter()
            .copied()
            .flat_map(Expression::children)
            .collect();
        levels.push(current);
        current = next;
    }
    levels
}

fn label(node: &Expression, var: Option<&Var>) -> String {
    match (node, var) {
        (Expression::Variable(_, name), Some(var)) => {
            format!("{} {}", name, var.usage_count(name))
        }
        _ => node.to_string(),
    }
}

fn labelled_levels(expr: &Expression, var: Option<&Var>) -> Vec<Vec<String>> {
    levels(expr)
        .iter()
        .map(|level| level.iter().map(|node| label(node, var)).collect())
        .collect()
}

fn render_expression(expr: &Expression, offset: usize, var: Option<&Var>) -> String {
    let mut s = String::new();
    for (depth, level) in labelled_levels(expr, var).into_iter().enumerate() {
        let indent = INDENT.repeat(offset + depth);
        for label in level {
            s.push_str(&format!("{}{}\n", indent, label));
        }
    }
    s
}

/// Both sides of a comparison share one set of levels. The first level is
/// left root, comparison, right root and target; deeper levels hold the left
/// side's nodes followed by the right side's.
fn render_condition(
    lhs: &Expression,
    cmp: &Comparison,
    rhs: &Expression,
    target: u32,
    var: Option<&Var>,
) -> String {
    let left = labelled_levels(lhs, var);
    let right = labelled_levels(rhs, var);
    let mut s = String::new();
    for depth in 0..left.len().max(right.len()) {
        let indent = INDENT.repeat(depth + 1);
        let mut labels = left.get(depth).cloned().unwrap_or_default();
        if depth == 0 {
            labels.push(cmp.to_string());
        }
        labels.extend(right.get(depth).cloned().unwrap_or_default());
        if depth == 0 {
            labels.push(target.to_string());
        }
        for label in labels {
            s.push_str(&format!("{}{}\n", indent, label));
        }
    }
    s
}

fn render_statement(number: u32, statement: &Statement, stats: Option<(Stats, &Var)>) -> String {
    let count = |n: usize| match stats {
        Some(_) => format!(" {}", n),
        None => String::new(),
    };
    let runs = stats.map_or(0, |(stats, _)| stats.runs);
    let tree = |expr: &Expression| render_expression(expr, 1, stats.map(|(_, var)| var));
    let name = |ident: &Ident| match stats {
        Some((_, var)) => format!("{}{} {}\n", INDENT, ident, var.usage_count(ident)),
        None => format!("{}{}\n", INDENT, ident),
    };
    let mut s = String::new();
    match statement {
        Statement::Rem(remark) => {
            s.push_str(&format!("{} REM{}\n", number, count(runs)));
            if !remark.is_empty() {
                s.push_str(&format!("{}{}\n", INDENT, remark));
            }
        }
        Statement::Let(_, ident, expr) => {
            s.push_str(&format!("{} LET ={}\n", number, count(runs)));
            s.push_str(&name(ident));
            s.push_str(&tree(expr));
        }
        Statement::If(lhs, cmp, rhs, target) => {
            let counts = match stats {
                Some((stats, _)) => format!(" {} {}", stats.taken, stats.not_taken),
                None => String::new(),
            };
            s.push_str(&format!("{} IF THEN{}\n", number, counts));
            s.push_str(&render_condition(
                lhs,
                cmp,
                rhs,
                *target,
                stats.map(|(_, var)| var),
            ));
        }
        Statement::Print(expr) => {
            s.push_str(&format!("{} PRINT{}\n", number, count(runs)));
            s.push_str(&tree(expr));
        }
        Statement::Input(_, ident) => {
            s.push_str(&format!("{} INPUT{}\n", number, count(runs)));
            s.push_str(&name(ident));
        }
        Statement::Goto(target) => {
            s.push_str(&format!("{} GOTO{}\n", number, count(runs)));
            s.push_str(&format!("{}{}\n", INDENT, target));
        }
        Statement::End => s.push_str(&format!("{} END{}\n", number, count(runs))),
    }
    s
}
