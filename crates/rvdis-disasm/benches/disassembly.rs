//! Benchmarks for disassembly performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rvdis_core::{IsaConfig, Xlen};
use rvdis_disasm::{Disassembler, RiscVDisassembler};

/// Sample RV64GC code: a small function mixing compressed and full-width
/// arithmetic, memory and control flow.
const RISCV_CODE: &[u8] = &[
    0x41, 0x11, // addi sp, sp, -16
    0x06, 0xe4, // sd ra, 8(sp)
    0x22, 0xe0, // sd s0, 0(sp)
    0x00, 0x08, // addi s0, sp, 16
    0x13, 0x05, 0xa0, 0x02, // li a0, 42
    0xb3, 0x05, 0xb5, 0x00, // add a1, a0, a1
    0x63, 0x04, 0xb5, 0x00, // beq a0, a1, 8
    0x73, 0x25, 0x00, 0xc0, // rdcycle a0
    0x57, 0xf5, 0x05, 0x0d, // vsetvli a0, a1, e64, m1, ta, ma
    0xa2, 0x60, // ld ra, 8(sp)
    0x02, 0x64, // ld s0, 0(sp)
    0x41, 0x01, // addi sp, sp, 16
    0x82, 0x80, // ret
];

/// Larger code block for throughput testing (repeated pattern).
fn generate_large_riscv_block(size: usize) -> Vec<u8> {
    RISCV_CODE.iter().copied().cycle().take(size).collect()
}

fn bench_riscv_disassembly(c: &mut Criterion) {
    let disasm = RiscVDisassembler::new();

    let mut group = c.benchmark_group("riscv_disassembly");

    group.bench_function("single_instruction", |b| {
        b.iter(|| disasm.disassemble(0x1000, black_box(0x02a0_0513)))
    });

    group.bench_function("small_function", |b| {
        b.iter(|| disasm.disassemble_block(black_box(RISCV_CODE), 0x1000))
    });

    for size in [1024, 4096, 16384] {
        let code = generate_large_riscv_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("block", size), &code, |b, code| {
            b.iter(|| disasm.disassemble_block(black_box(code), 0x1000))
        });
    }

    group.finish();
}

fn bench_riscv_vendor_dispatch(c: &mut Criterion) {
    let base = RiscVDisassembler::new();
    let vendor = RiscVDisassembler::with_config(Xlen::Rv64, IsaConfig::all_vendor());
    // th.addsl a0, a1, a2, 1 falls through every base tree first
    let addsl: u64 = (1 << 25) | (12 << 20) | (11 << 15) | (1 << 12) | (10 << 7) | 0x0b;

    let mut group = c.benchmark_group("riscv_dispatch");
    group.bench_function("custom0_base_only", |b| {
        b.iter(|| base.decode(0, black_box(addsl)))
    });
    group.bench_function("custom0_all_vendor", |b| {
        b.iter(|| vendor.decode(0, black_box(addsl)))
    });
    group.finish();
}

criterion_group!(benches, bench_riscv_disassembly, bench_riscv_vendor_dispatch);
criterion_main!(benches);
