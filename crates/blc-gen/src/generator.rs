//! The code generator: functions, statements and control flow.
//!
//! Expression lowering lives in `expr.rs`; this module owns the output
//! buffer, the label counter, the loop-label stack and the per-function
//! symbol table.

use blc_par::{ArrayDecl, Assign, ElseClause, Expr, Function, IfStmt, Item, LoopStmt, Program, Stmt, TypeName, VarDecl};
use blc_util::{Diagnostic, Handler, FRAME_SCRATCH, MAX_LOCALS, MAX_LOOP_DEPTH};

use crate::error::{CodeGenError, Result};
use crate::runtime;
use crate::symbols::SymbolTable;

/// System V AMD64 integer argument registers, in order.
pub(crate) const ARG_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

/// Labels a `break`/`continue` inside one loop jumps to.
struct LoopLabels {
    start: String,
    end: String,
}

/// Walks a [`Program`] and produces one NASM translation unit.
pub struct Generator<'a> {
    handler: &'a mut Handler,
    out: String,
    labels: u32,
    strings: u32,
    loop_stack: Vec<LoopLabels>,
    pub(crate) symbols: SymbolTable,
}

impl<'a> Generator<'a> {
    /// Creates a generator reporting semantic problems to `handler`.
    pub fn new(handler: &'a mut Handler) -> Self {
        Self {
            handler,
            out: String::new(),
            labels: 0,
            strings: 0,
            loop_stack: Vec::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Generates the whole translation unit.
    ///
    /// Fails only when the program has no `main`; everything else the
    /// generator objects to is collected on the handler and emission
    /// continues. Import items are skipped (resolution already spliced
    /// their functions in).
    pub fn generate(mut self, program: &Program) -> Result<String> {
        let has_main = program
            .items
            .iter()
            .any(|item| matches!(item, Item::Function(f) if f.name == "main"));
        if !has_main {
            return Err(CodeGenError::MissingMain);
        }

        self.out.push_str(runtime::DATA_SECTION);
        self.out.push_str("\nsection .text\nglobal _start\n\n");
        self.out.push_str(runtime::PRELUDE);

        for item in &program.items {
            if let Item::Function(f) = item {
                self.gen_function(f);
            }
        }

        self.out.push_str(runtime::START);
        Ok(self.out)
    }

    fn gen_function(&mut self, f: &Function) {
        self.symbols.clear();

        self.label(&f.name);
        self.emit("push rbp");
        self.emit("mov rbp, rsp");
        self.emit(&format!("sub rsp, {FRAME_SCRATCH}"));

        // Incoming register arguments are spilled into the frame so the
        // body can address every variable the same way.
        for (i, param) in f.params.iter().enumerate().take(ARG_REGS.len()) {
            if let Some(offset) = self.declare_scalar(&param.name, param.ty, f.line) {
                self.emit(&format!("mov [rbp-{offset}], {}", ARG_REGS[i]));
            }
        }

        for stmt in &f.body.stmts {
            self.gen_stmt(stmt);
        }

        // Falling off the end returns 0.
        self.emit("mov rax, 0");
        self.gen_epilogue();
        self.out.push('\n');
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => self.gen_var_decl(decl),
            Stmt::ArrayDecl(decl) => self.gen_array_decl(decl),
            Stmt::Assign(assign) => self.gen_assign(assign),
            Stmt::Increment { name, line } => self.gen_step("add", name, *line),
            Stmt::Decrement { name, line } => self.gen_step("sub", name, *line),
            Stmt::Return(expr) => self.gen_return(expr.as_ref()),
            Stmt::If(ifs) => self.gen_if(ifs),
            Stmt::Loop(l) => self.gen_loop(l),
            Stmt::Break { line } => self.gen_break(*line),
            Stmt::Continue { line } => self.gen_continue(*line),
            Stmt::Expr(expr) => {
                self.gen_expr(expr);
                // The value of an expression statement is discarded.
                self.emit("add rsp, 8");
            },
        }
    }

    fn gen_var_decl(&mut self, decl: &VarDecl) {
        let Some(offset) = self.declare_scalar(&decl.name, decl.ty, decl.line) else {
            return;
        };
        let Some(init) = &decl.init else {
            return;
        };

        self.gen_expr(init);
        if decl.ty == TypeName::Str {
            self.emit("pop rsi");
            self.emit(&format!("lea rdi, [rbp-{offset}]"));
            self.emit("call strcpy_internal");
        } else {
            self.emit("pop rax");
            self.emit(&format!("mov [rbp-{offset}], rax"));
        }
    }

    fn gen_array_decl(&mut self, decl: &ArrayDecl) {
        let Expr::Number(size) = &decl.size else {
            self.handler.emit(Diagnostic::error_at(
                format!("array size for '{}' must be a number literal", decl.name),
                decl.line,
            ));
            return;
        };
        if self.symbols.len() >= MAX_LOCALS {
            self.too_many_locals(decl.line);
            return;
        }
        let slots = (*size).max(0) as u32;
        self.symbols.declare_array(&decl.name, decl.ty, slots);
    }

    fn gen_assign(&mut self, assign: &Assign) {
        let Some(sym) = self.symbols.lookup(&assign.name) else {
            self.unknown_variable(&assign.name, assign.line);
            return;
        };
        let (offset, ty) = (sym.offset, sym.ty);

        match &assign.index {
            Some(index) => {
                // Right-hand side first, then the index; the store reads
                // them back in reverse.
                self.gen_expr(&assign.value);
                self.gen_expr(index);
                self.emit("pop rax");
                self.emit("pop rbx");
                self.emit(&format!("lea rcx, [rbp-{offset}]"));
                self.emit("shl rax, 3");
                self.emit("add rcx, rax");
                self.emit("mov [rcx], rbx");
            },
            None => {
                self.gen_expr(&assign.value);
                if ty == TypeName::Str {
                    self.emit("pop rsi");
                    self.emit(&format!("lea rdi, [rbp-{offset}]"));
                    self.emit("call strcpy_internal");
                } else {
                    self.emit("pop rax");
                    self.emit(&format!("mov [rbp-{offset}], rax"));
                }
            },
        }
    }

    fn gen_step(&mut self, op: &str, name: &str, line: u32) {
        match self.symbols.lookup(name) {
            Some(sym) => {
                let offset = sym.offset;
                self.emit(&format!("{op} qword [rbp-{offset}], 1"));
            },
            None => self.unknown_variable(name, line),
        }
    }

    fn gen_return(&mut self, expr: Option<&Expr>) {
        match expr {
            Some(expr) => {
                self.gen_expr(expr);
                self.emit("pop rax");
            },
            None => self.emit("mov rax, 0"),
        }
        self.gen_epilogue();
    }

    fn gen_epilogue(&mut self) {
        self.emit(&format!("add rsp, {FRAME_SCRATCH}"));
        self.emit("pop rbp");
        self.emit("ret");
    }

    fn gen_if(&mut self, ifs: &IfStmt) {
        let else_label = self.new_label();
        let end_label = self.new_label();

        self.gen_expr(&ifs.cond);
        self.emit("pop rax");
        self.emit("cmp rax, 0");
        self.emit(&format!("je {else_label}"));

        for stmt in &ifs.then_block.stmts {
            self.gen_stmt(stmt);
        }
        self.emit(&format!("jmp {end_label}"));

        self.label(&else_label);
        match &ifs.else_clause {
            Some(ElseClause::Block(block)) => {
                for stmt in &block.stmts {
                    self.gen_stmt(stmt);
                }
            },
            Some(ElseClause::If(nested)) => self.gen_if(nested),
            None => {},
        }
        self.label(&end_label);
    }

    fn gen_loop(&mut self, l: &LoopStmt) {
        let start = self.new_label();
        let end = self.new_label();

        if self.loop_stack.len() >= MAX_LOOP_DEPTH {
            self.handler.emit(Diagnostic::error(format!(
                "loops nested deeper than {MAX_LOOP_DEPTH}"
            )));
        }
        self.loop_stack.push(LoopLabels {
            start: start.clone(),
            end: end.clone(),
        });

        self.label(&start);
        self.gen_expr(&l.cond);
        self.emit("pop rax");
        self.emit("cmp rax, 0");
        self.emit(&format!("je {end}"));

        for stmt in &l.body.stmts {
            self.gen_stmt(stmt);
        }
        self.emit(&format!("jmp {start}"));
        self.label(&end);

        self.loop_stack.pop();
    }

    fn gen_break(&mut self, line: u32) {
        match self.loop_stack.last() {
            Some(labels) => {
                let end = labels.end.clone();
                self.emit(&format!("jmp {end}"));
            },
            None => self
                .handler
                .emit(Diagnostic::error_at("break outside of loop", line)),
        }
    }

    fn gen_continue(&mut self, line: u32) {
        match self.loop_stack.last() {
            Some(labels) => {
                let start = labels.start.clone();
                self.emit(&format!("jmp {start}"));
            },
            None => self
                .handler
                .emit(Diagnostic::error_at("continue outside of loop", line)),
        }
    }

    /// Declares a scalar, enforcing the per-function variable limit.
    fn declare_scalar(&mut self, name: &str, ty: TypeName, line: u32) -> Option<u32> {
        if self.symbols.len() >= MAX_LOCALS {
            self.too_many_locals(line);
            return None;
        }
        Some(self.symbols.declare_scalar(name, ty))
    }

    pub(crate) fn unknown_variable(&mut self, name: &str, line: u32) {
        self.handler
            .emit(Diagnostic::error_at(format!("unknown variable '{name}'"), line));
    }

    fn too_many_locals(&mut self, line: u32) {
        self.handler.emit(Diagnostic::error_at(
            format!("too many variables in function (limit {MAX_LOCALS})"),
            line,
        ));
    }

    /// Reports an expression-level semantic problem. Expressions carry no
    /// line information, so these diagnostics are position-free.
    pub(crate) fn report(&mut self, message: String) {
        self.handler.emit(Diagnostic::error(message));
    }

    /// Allocates the next `.L<n>` label. The counter is shared by the
    /// whole translation unit, never reset per function.
    pub(crate) fn new_label(&mut self) -> String {
        let label = format!(".L{}", self.labels);
        self.labels += 1;
        label
    }

    /// Allocates the next string-literal label. String labels keep the
    /// leading dot so they do not reset NASM's local-label context: a
    /// bare label between `.L` definitions would detach every jump that
    /// crosses it from its target.
    pub(crate) fn new_string_label(&mut self) -> String {
        let label = format!(".str_{}", self.strings);
        self.strings += 1;
        label
    }

    /// Appends an indented instruction line.
    pub(crate) fn emit(&mut self, line: &str) {
        self.out.push_str("    ");
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Appends a label definition.
    pub(crate) fn label(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push_str(":\n");
    }

    /// Appends raw text to the output stream.
    pub(crate) fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }
}
