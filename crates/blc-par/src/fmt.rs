//! Source rendering of an AST.
//!
//! Renders a [`Program`] back to B source. Binary and unary expressions
//! are fully parenthesized, so re-parsing the rendered text rebuilds the
//! exact same tree; whitespace is not preserved.

use std::fmt::Write;

use crate::ast::*;

/// Renders `program` as B source text.
pub fn to_source(program: &Program) -> String {
    let mut out = String::new();
    for item in &program.items {
        match item {
            Item::Import(import) => {
                let _ = writeln!(out, "import \"{}\"", escape(import.path.as_bytes()));
            },
            Item::Function(f) => {
                let params: Vec<String> = f
                    .params
                    .iter()
                    .map(|p| format!("{} {}", p.ty.as_str(), p.name))
                    .collect();
                let _ = writeln!(out, "func {}({}) {{", f.name, params.join(", "));
                write_block_body(&mut out, &f.body, 1);
                out.push_str("}\n");
            },
        }
    }
    out
}

fn write_block_body(out: &mut String, block: &Block, depth: usize) {
    for stmt in &block.stmts {
        write_stmt(out, stmt, depth);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    let pad = "    ".repeat(depth);
    match stmt {
        Stmt::VarDecl(decl) => {
            match &decl.init {
                Some(init) => {
                    let _ = writeln!(
                        out,
                        "{pad}{} {} = {}",
                        decl.ty.as_str(),
                        decl.name,
                        expr_source(init)
                    );
                },
                None => {
                    let _ = writeln!(out, "{pad}{} {}", decl.ty.as_str(), decl.name);
                },
            };
        },
        Stmt::ArrayDecl(decl) => {
            let _ = writeln!(
                out,
                "{pad}{} {}[{}]",
                decl.ty.as_str(),
                decl.name,
                expr_source(&decl.size)
            );
        },
        Stmt::Assign(assign) => match &assign.index {
            Some(index) => {
                let _ = writeln!(
                    out,
                    "{pad}{}[{}] = {}",
                    assign.name,
                    expr_source(index),
                    expr_source(&assign.value)
                );
            },
            None => {
                let _ = writeln!(out, "{pad}{} = {}", assign.name, expr_source(&assign.value));
            },
        },
        Stmt::Increment { name, .. } => {
            let _ = writeln!(out, "{pad}{name}++");
        },
        Stmt::Decrement { name, .. } => {
            let _ = writeln!(out, "{pad}{name}--");
        },
        Stmt::Return(None) => {
            let _ = writeln!(out, "{pad}return");
        },
        Stmt::Return(Some(expr)) => {
            let _ = writeln!(out, "{pad}return {}", expr_source(expr));
        },
        Stmt::If(ifs) => {
            let _ = write!(out, "{pad}");
            write_if(out, ifs, depth);
        },
        Stmt::Loop(l) => {
            let _ = writeln!(out, "{pad}loop {} {{", expr_source(&l.cond));
            write_block_body(out, &l.body, depth + 1);
            let _ = writeln!(out, "{pad}}}");
        },
        Stmt::Break { .. } => {
            let _ = writeln!(out, "{pad}break");
        },
        Stmt::Continue { .. } => {
            let _ = writeln!(out, "{pad}continue");
        },
        Stmt::Expr(expr) => {
            let _ = writeln!(out, "{pad}{}", expr_source(expr));
        },
    }
}

fn write_if(out: &mut String, ifs: &IfStmt, depth: usize) {
    let pad = "    ".repeat(depth);
    let _ = writeln!(out, "if {} {{", expr_source(&ifs.cond));
    write_block_body(out, &ifs.then_block, depth + 1);
    match &ifs.else_clause {
        None => {
            let _ = writeln!(out, "{pad}}}");
        },
        Some(ElseClause::Block(block)) => {
            let _ = writeln!(out, "{pad}}} else {{");
            write_block_body(out, block, depth + 1);
            let _ = writeln!(out, "{pad}}}");
        },
        Some(ElseClause::If(nested)) => {
            let _ = write!(out, "{pad}}} else ");
            write_if(out, nested, depth);
        },
    }
}

/// Renders one expression, parenthesizing every operator application.
pub fn expr_source(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Str(s) => format!("\"{}\"", escape(s)),
        Expr::Ident(name) => name.clone(),
        Expr::Binary { op, lhs, rhs } => {
            format!(
                "({} {} {})",
                expr_source(lhs),
                op.symbol(),
                expr_source(rhs)
            )
        },
        Expr::Unary { op, operand } => format!("({}{})", op.symbol(), expr_source(operand)),
        Expr::Call { callee, args } => {
            let rendered: Vec<String> = args.iter().map(expr_source).collect();
            format!("{}({})", callee, rendered.join(", "))
        },
        Expr::Index { name, index } => format!("{}[{}]", name, expr_source(index)),
    }
}

/// Re-escapes the bytes the lexer resolved. Anything else (including
/// retained unknown escape pairs) round-trips as-is. Rendering produces
/// text, so bytes outside ASCII come out as their one-char reading.
fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'"' => out.push_str("\\\""),
            other => out.push(other as char),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    /// Parse, render, parse again: the trees must match.
    fn assert_roundtrip(source: &str) {
        let first = parse(source).unwrap();
        let rendered = to_source(&first);
        let second = parse(&rendered).unwrap_or_else(|e| {
            panic!("rendered source failed to parse: {e}\n---\n{rendered}")
        });
        assert_eq!(first, second, "rendered source:\n{rendered}");
    }

    #[test]
    fn test_roundtrip_arithmetic() {
        assert_roundtrip("func main() {\n print(1 + 2 * 3)\n print(\"\\n\")\n return 0 \n}");
    }

    #[test]
    fn test_roundtrip_loop_and_arrays() {
        assert_roundtrip(
            "func main() {\n int a[3]\n int i = 0\n loop i < 3 {\n a[i] = i * i\n i++ \n}\n return a[2] \n}",
        );
    }

    #[test]
    fn test_roundtrip_else_if_chain() {
        assert_roundtrip(
            "func main() {\n if a {\n x = 1 \n} else if b {\n x = 2 \n} else {\n x = 3 \n}\n}",
        );
    }

    #[test]
    fn test_roundtrip_imports_and_params() {
        assert_roundtrip("import \"lib.b\"\nfunc add(int x, int y) {\n return x + y \n}");
    }

    #[test]
    fn test_roundtrip_unary_and_logical() {
        assert_roundtrip("func main() {\n return !(a && b) || -c < 0 \n}");
    }

    #[test]
    fn test_roundtrip_string_escapes() {
        assert_roundtrip("func main() {\n print(\"tab\\there\\nquote \\\" done\")\n}");
    }

    #[test]
    fn test_rendering_is_stable() {
        // Rendering an already-rendered program changes nothing.
        let program = parse("func main() {\n int x = (1 + 2) * 3\n return x \n}").unwrap();
        let once = to_source(&program);
        let twice = to_source(&parse(&once).unwrap());
        assert_eq!(once, twice);
    }
}
