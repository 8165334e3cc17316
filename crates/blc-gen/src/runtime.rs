//! Fixed runtime text emitted into every translation unit.
//!
//! Five helpers form a stable ABI (`print_no_nl`, `print_str_no_nl`,
//! `input`, `str_to_int`, `strcpy_internal`): a user function with one of
//! these names collides at the label level, so the names and calling
//! conventions must not drift.
//!
//! All I/O is direct `read`/`write`/`exit` syscalls on fds 0 and 1; there
//! is no libc anywhere.

/// The `.data` block: conversion and input buffers shared by the helpers.
pub const DATA_SECTION: &str = "\
section .data
digit_buffer: times 10 db 0
              db 10
digit_count: dq 0
input_buffer: times 256 db 0
newline: db 10
";

/// The runtime helpers, emitted at the top of `.text`.
///
/// - `print_no_nl(rdi: int)`: signed base-10 print to fd 1, no newline.
///   Digits are built back-to-front in `digit_buffer`.
/// - `print_str_no_nl(rdi: *u8)`: scans for NUL, writes to fd 1.
/// - `input() -> *u8`: reads up to 255 bytes from fd 0 into
///   `input_buffer`, overwrites the trailing byte (assumed `\n`) with
///   NUL, returns the buffer address.
/// - `str_to_int(rdi: *u8) -> int`: decimal parse, stops at the first
///   non-digit.
/// - `strcpy_internal(rdi: *u8, rsi: *u8)`: NUL-terminated byte copy.
pub const PRELUDE: &str = "\
print_no_nl:
    mov rax, rdi
    xor r9, r9
    test rax, rax
    jns .convert
    mov r9, 1
    neg rax
.convert:
    lea rsi, [digit_buffer + 10]
    mov qword [digit_count], 0
    mov rbx, 10
.next_digit:
    xor rdx, rdx
    div rbx
    add dl, '0'
    dec rsi
    mov [rsi], dl
    inc qword [digit_count]
    test rax, rax
    jnz .next_digit
    test r9, r9
    jz .write
    dec rsi
    mov byte [rsi], '-'
    inc qword [digit_count]
.write:
    mov rax, 1
    mov rdi, 1
    mov rdx, [digit_count]
    syscall
    ret

print_str_no_nl:
    mov rsi, rdi
    xor rdx, rdx
.scan:
    cmp byte [rsi + rdx], 0
    je .write
    inc rdx
    jmp .scan
.write:
    mov rax, 1
    mov rdi, 1
    syscall
    ret

input:
    mov rax, 0
    mov rdi, 0
    lea rsi, [input_buffer]
    mov rdx, 255
    syscall
    lea rsi, [input_buffer]
    mov byte [rsi + rax - 1], 0
    lea rax, [input_buffer]
    ret

str_to_int:
    xor rax, rax
    mov rsi, rdi
.next:
    movzx rcx, byte [rsi]
    cmp rcx, '0'
    jb .done
    cmp rcx, '9'
    ja .done
    imul rax, rax, 10
    sub rcx, '0'
    add rax, rcx
    inc rsi
    jmp .next
.done:
    ret

strcpy_internal:
.copy:
    mov al, [rsi]
    mov [rdi], al
    inc rdi
    inc rsi
    test al, al
    jnz .copy
    ret

";

/// Process entry point: run `main`, exit with its return value.
pub const START: &str = "\
_start:
    call main
    mov rdi, rax
    mov rax, 60
    syscall
";
