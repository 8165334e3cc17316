//! Expression lowering.
//!
//! Stack-machine discipline: every expression ends with `push rax` (or
//! `push rdx` for `%`) and leaves exactly one 8-byte value behind.
//! Binary operands are evaluated right then left, so the pops come back
//! as `rax` = left, `rbx` = right and non-commutative operators read
//! naturally.

use blc_par::{BinOp, Expr, TypeName, UnOp};

use crate::generator::{Generator, ARG_REGS};

impl<'a> Generator<'a> {
    pub(crate) fn gen_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(n) => {
                self.emit(&format!("mov rax, {n}"));
                self.emit("push rax");
            },
            Expr::Str(s) => self.gen_string_literal(s),
            Expr::Ident(name) => self.gen_ident(name),
            Expr::Index { name, index } => self.gen_index(name, index),
            Expr::Binary { op, lhs, rhs } => self.gen_binary(*op, lhs, rhs),
            Expr::Unary { op, operand } => self.gen_unary(*op, operand),
            Expr::Call { callee, args } => self.gen_call(callee, args),
        }
    }

    /// Emits the literal's bytes into a `.data` interjection and pushes
    /// the address. Escapes were already resolved by the lexer; here
    /// every raw byte is printed as a decimal with a trailing NUL.
    fn gen_string_literal(&mut self, s: &[u8]) {
        let label = self.new_string_label();
        let mut bytes: Vec<String> = s.iter().map(|b| b.to_string()).collect();
        bytes.push("0".to_string());

        self.raw("section .data\n");
        self.raw(&format!("{label}: db {}\n", bytes.join(", ")));
        self.raw("section .text\n");

        self.emit(&format!("mov rax, {label}"));
        self.emit("push rax");
    }

    /// Loads a scalar, or the address of an in-frame `string` buffer.
    fn gen_ident(&mut self, name: &str) {
        match self.symbols.lookup(name) {
            Some(sym) => {
                let (offset, ty) = (sym.offset, sym.ty);
                if ty == TypeName::Str {
                    self.emit(&format!("lea rax, [rbp-{offset}]"));
                } else {
                    self.emit(&format!("mov rax, [rbp-{offset}]"));
                }
            },
            None => {
                self.report(format!("unknown variable '{name}'"));
                // Keep the file assemblable; the invocation still fails.
                self.emit("mov rax, 0");
            },
        }
        self.emit("push rax");
    }

    /// Loads `name[index]`. The base offset is the slot-0 address, so
    /// the element address is base plus index scaled by 8. No bounds
    /// check.
    fn gen_index(&mut self, name: &str, index: &Expr) {
        let Some(sym) = self.symbols.lookup(name) else {
            self.report(format!("unknown variable '{name}'"));
            self.emit("mov rax, 0");
            self.emit("push rax");
            return;
        };
        let offset = sym.offset;

        self.gen_expr(index);
        self.emit("pop rax");
        self.emit(&format!("lea rbx, [rbp-{offset}]"));
        self.emit("shl rax, 3");
        self.emit("add rbx, rax");
        self.emit("mov rax, [rbx]");
        self.emit("push rax");
    }

    fn gen_binary(&mut self, op: BinOp, lhs: &Expr, rhs: &Expr) {
        self.gen_expr(rhs);
        self.gen_expr(lhs);
        self.emit("pop rax");
        self.emit("pop rbx");

        match op {
            BinOp::Add => self.emit("add rax, rbx"),
            BinOp::Sub => self.emit("sub rax, rbx"),
            BinOp::Mul => self.emit("imul rax, rbx"),
            BinOp::Div => {
                self.emit("xor rdx, rdx");
                self.emit("idiv rbx");
            },
            BinOp::Mod => {
                self.emit("xor rdx, rdx");
                self.emit("idiv rbx");
                self.emit("push rdx");
                return;
            },
            BinOp::Eq => self.gen_compare("sete"),
            BinOp::Ne => self.gen_compare("setne"),
            BinOp::Lt => self.gen_compare("setl"),
            BinOp::Gt => self.gen_compare("setg"),
            BinOp::Le => self.gen_compare("setle"),
            BinOp::Ge => self.gen_compare("setge"),
            // Logical operators are bitwise over the full values; there
            // is no short-circuiting.
            BinOp::And => self.emit("and rax, rbx"),
            BinOp::Or => self.emit("or rax, rbx"),
        }
        self.emit("push rax");
    }

    fn gen_compare(&mut self, set: &str) {
        self.emit("cmp rax, rbx");
        self.emit(&format!("{set} al"));
        self.emit("movzx rax, al");
    }

    fn gen_unary(&mut self, op: UnOp, operand: &Expr) {
        self.gen_expr(operand);
        self.emit("pop rax");
        match op {
            UnOp::Neg => self.emit("neg rax"),
            UnOp::Not => {
                self.emit("test rax, rax");
                self.emit("setz al");
                self.emit("movzx rax, al");
            },
        }
        self.emit("push rax");
    }

    fn gen_call(&mut self, callee: &str, args: &[Expr]) {
        match callee {
            "exit" => self.gen_exit(args),
            "print" => self.gen_print(args),
            "input" => self.gen_input(args),
            "str_to_int" => self.gen_str_to_int(args),
            _ => self.gen_user_call(callee, args),
        }
    }

    /// `exit(code?)`: syscall 60, defaulting to status 0.
    fn gen_exit(&mut self, args: &[Expr]) {
        match args.first() {
            Some(code) => {
                self.gen_expr(code);
                self.emit("pop rdi");
            },
            None => self.emit("mov rdi, 0"),
        }
        self.emit("mov rax, 60");
        self.emit("syscall");
        self.emit("push rax");
    }

    /// `print(args...)`: each argument goes through the integer or the
    /// string helper, chosen statically. No separators, no newline; the
    /// caller passes `"\n"` explicitly.
    fn gen_print(&mut self, args: &[Expr]) {
        for arg in args {
            self.gen_expr(arg);
            self.emit("pop rdi");
            let helper = self.print_helper(arg);
            self.emit(helper);
        }
        self.emit("push rax");
    }

    /// `input(prompt?)`: optionally print the prompt, then read a line
    /// into the shared buffer and push its address.
    fn gen_input(&mut self, args: &[Expr]) {
        if let Some(prompt) = args.first() {
            self.gen_expr(prompt);
            self.emit("pop rdi");
            let helper = self.print_helper(prompt);
            self.emit(helper);
        }
        self.emit("call input");
        self.emit("push rax");
    }

    /// `str_to_int(s)`: decimal parse of a NUL-terminated string.
    fn gen_str_to_int(&mut self, args: &[Expr]) {
        match args.first() {
            Some(arg) => {
                self.gen_expr(arg);
                self.emit("pop rdi");
                self.emit("call str_to_int");
            },
            None => {
                self.report("str_to_int expects an argument".to_string());
                self.emit("mov rax, 0");
            },
        }
        self.emit("push rax");
    }

    /// A call to a user function: the first six arguments travel in the
    /// System V integer registers; anything beyond is not lowered.
    fn gen_user_call(&mut self, callee: &str, args: &[Expr]) {
        let lowered = args.len().min(ARG_REGS.len());
        for arg in &args[..lowered] {
            self.gen_expr(arg);
        }
        for i in (0..lowered).rev() {
            self.emit(&format!("pop {}", ARG_REGS[i]));
        }
        self.emit(&format!("call {callee}"));
        self.emit("push rax");
    }

    /// Which print helper an argument needs: the string one for string
    /// literals and for identifiers or array accesses whose declared
    /// type is `string`, the integer one for everything else.
    fn print_helper(&self, arg: &Expr) -> &'static str {
        let is_string = match arg {
            Expr::Str(_) => true,
            Expr::Ident(name) | Expr::Index { name, .. } => self
                .symbols
                .lookup(name)
                .is_some_and(|sym| sym.ty == TypeName::Str),
            _ => false,
        };
        if is_string {
            "call print_str_no_nl"
        } else {
            "call print_no_nl"
        }
    }
}
