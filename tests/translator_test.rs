//! Translate, load and run programs end to end.

use emu6502::{translate, translate_to_hex, Bus, MemoryBus, TranslateError};

fn run_source(source: &str, ticks: u64) -> Bus {
    let mut bus = Bus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x20);
    bus.load_program(&translate_to_hex(source).unwrap()).unwrap();
    bus.reset();
    bus.run(ticks);
    bus
}

#[test]
fn test_sum_loop() {
    // Sum 1..=10 into $10
    let source = "
        LDA #$00
        LDX #$0A
        STX $11
        CLC
        ADC $11
        DEX
        BNE $F8
        STA $10
    ";
    let bus = run_source(source, 500);

    assert_eq!(bus.read(0x0010), 55);
}

#[test]
fn test_subroutine_call() {
    // JSR $2010; STA $0400; then at $2010: LDA #$2A; RTS
    let mut bus = Bus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x20);
    bus.load_program(&translate_to_hex("JSR $2010 STA $0400").unwrap())
        .unwrap();
    let routine = translate("LDA #$2A RTS").unwrap();
    for (offset, byte) in routine.iter().enumerate() {
        bus.write(0x2010 + offset as u16, *byte);
    }
    bus.reset();

    for _ in 0..4 {
        bus.step_instruction();
    }

    assert_eq!(bus.read(0x0400), 0x2A);
}

#[test]
fn test_indirect_indexed_copy() {
    // Pointer at $20 -> $3000, copy ($20),Y for Y = 0..3 to $1000,Y
    let source = "
        LDA #$00 STA $20
        LDA #$30 STA $21
        LDY #$00
        LDA ($20),Y
        STA $1000,Y
        INY
        CPY #$03
        BNE $F6
    ";
    let mut bus = Bus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x20);
    bus.write(0x3000, 0x11);
    bus.write(0x3001, 0x22);
    bus.write(0x3002, 0x33);
    bus.load_program(&translate_to_hex(source).unwrap()).unwrap();
    bus.reset();
    bus.run(300);

    assert_eq!(bus.read(0x1000), 0x11);
    assert_eq!(bus.read(0x1001), 0x22);
    assert_eq!(bus.read(0x1002), 0x33);
}

#[test]
fn test_errors_surface_before_loading() {
    assert!(matches!(
        translate_to_hex("LDA #$01 JMP"),
        Err(TranslateError::MissingOperand(_))
    ));
    assert!(matches!(
        translate_to_hex("HCF"),
        Err(TranslateError::UnknownMnemonic(_))
    ));
}
