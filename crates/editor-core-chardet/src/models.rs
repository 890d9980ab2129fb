//! Coding state machine tables.
//!
//! Each class table maps a byte to a byte class; the state table is indexed by
//! `state * class_factor + class`. State 0 is [`START`], 1 is [`ERROR`] and 2 is [`ITS_ME`]; the
//! rest are encoding-specific intermediate states.

use crate::state_machine::{ERROR, ITS_ME, SmModel, START};

const UTF8_CLASSES: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, // 00
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, // 10
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 30
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 40
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 50
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 60
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 70
    2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, // 80
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 90
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, // a0
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, // b0
    0, 0, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // c0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // d0
    7, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 9, 8, 8, // e0
    10, 11, 11, 11, 11, 11, 11, 11, 12, 13, 13, 13, 14, 15, 0, 0, // f0
];

#[rustfmt::skip]
const UTF8_STATES: [u8; 208] = [
    ERROR,  START,  ERROR,  ERROR,  ERROR,  ERROR,  12,     10,     9,      11,     8,      7,      6,      5,      4,      3, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  5,      5,      5,      5,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 3
    ERROR,  ERROR,  ERROR,  5,      5,      5,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 4
    ERROR,  ERROR,  7,      7,      7,      7,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 5
    ERROR,  ERROR,  ERROR,  ERROR,  7,      7,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 6
    ERROR,  ERROR,  9,      9,      9,      9,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 7
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  9,      ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 8
    ERROR,  ERROR,  12,     12,     12,     12,     ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 9
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  12,     ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 10
    ERROR,  ERROR,  12,     12,     12,     ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 11
    ERROR,  ERROR,  START,  START,  START,  START,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 12
];

/// UTF-8, including the 5 and 6 byte forms.
pub const UTF8: SmModel = SmModel {
    class_table: &UTF8_CLASSES,
    class_factor: 16,
    state_table: &UTF8_STATES,
    char_len_table: &[0, 1, 0, 0, 0, 0, 2, 3, 3, 3, 4, 4, 5, 5, 6, 6],
    name: "UTF-8",
};

const SHIFT_JIS_CLASSES: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, // 00
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, // 10
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 30
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 40
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 50
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 60
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, // 70
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // 80
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // 90
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, // e0
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0, 0, // f0
];

#[rustfmt::skip]
const SHIFT_JIS_STATES: [u8; 24] = [
    ERROR,  START,  START,  3,      ERROR,  ERROR, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  START,  START,  START,  START, // 3
];

/// Shift_JIS, tolerating 0xA0 as a single byte.
pub const SHIFT_JIS: SmModel = SmModel {
    class_table: &SHIFT_JIS_CLASSES,
    class_factor: 6,
    state_table: &SHIFT_JIS_STATES,
    char_len_table: &[0, 1, 1, 2, 0, 0],
    name: "Shift_JIS",
};

const EUC_JP_CLASSES: [u8; 256] = [
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, // 00
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 4, 4, 4, 4, // 10
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 20
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 30
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 40
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 50
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 60
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 70
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 3, // 80
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, // 90
    5, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // e0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, // f0
];

#[rustfmt::skip]
const EUC_JP_STATES: [u8; 36] = [
    3,      4,      3,      5,      START,  ERROR, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    START,  ERROR,  START,  ERROR,  ERROR,  ERROR, // 3
    ERROR,  ERROR,  START,  ERROR,  ERROR,  ERROR, // 4
    3,      ERROR,  3,      ERROR,  ERROR,  ERROR, // 5
];

/// EUC-JP, including SS2 half-width katakana and SS3 JIS X 0212.
pub const EUC_JP: SmModel = SmModel {
    class_table: &EUC_JP_CLASSES,
    class_factor: 6,
    state_table: &EUC_JP_STATES,
    char_len_table: &[2, 2, 2, 3, 1, 0],
    name: "EUC-JP",
};

const GB18030_CLASSES: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, // 00
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, // 10
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 1, // 30
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 40
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 50
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 60
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 4, // 70
    5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 80
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 90
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // a0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // b0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // c0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // d0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // e0
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 0, // f0
];

#[rustfmt::skip]
const GB18030_STATES: [u8; 42] = [
    ERROR,  START,  START,  START,  START,  START,  3, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  START,  4,      ERROR,  START,  START, // 3
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  5, // 4
    ERROR,  ERROR,  ERROR,  ITS_ME, ERROR,  ERROR,  ERROR, // 5
];

/// GB18030 two and four byte sequences.
pub const GB18030: SmModel = SmModel {
    class_table: &GB18030_CLASSES,
    class_factor: 7,
    state_table: &GB18030_STATES,
    char_len_table: &[0, 1, 1, 1, 1, 1, 2],
    name: "GB18030",
};

const EUC_KR_CLASSES: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, // 00
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, // 10
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 30
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 40
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 50
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 60
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 70
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 80
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 90
    0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // e0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, // f0
];

#[rustfmt::skip]
const EUC_KR_STATES: [u8; 16] = [
    ERROR,  START,  3,      ERROR, // 0
    ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  START,  START, // 3
];

/// EUC-KR.
pub const EUC_KR: SmModel = SmModel {
    class_table: &EUC_KR_CLASSES,
    class_factor: 4,
    state_table: &EUC_KR_STATES,
    char_len_table: &[0, 1, 2, 0],
    name: "EUC-KR",
};

const BIG5_CLASSES: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, // 00
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, // 10
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 30
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 40
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 50
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 60
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, // 70
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 80
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, // 90
    4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // a0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // b0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // c0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // d0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // e0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, // f0
];

#[rustfmt::skip]
const BIG5_STATES: [u8; 20] = [
    ERROR,  START,  START,  3,      ERROR, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  START,  START,  START, // 3
];

/// Big5.
pub const BIG5: SmModel = SmModel {
    class_table: &BIG5_CLASSES,
    class_factor: 5,
    state_table: &BIG5_STATES,
    char_len_table: &[0, 1, 1, 2, 0],
    name: "Big5",
};

const EUC_TW_CLASSES: [u8; 256] = [
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, // 00
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 2, 2, 2, 2, // 10
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 20
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 30
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 40
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 50
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 60
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 70
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6, 0, // 80
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 90
    0, 3, 4, 4, 4, 4, 4, 4, 5, 5, 1, 1, 1, 1, 1, 1, // a0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // b0
    1, 1, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // c0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // d0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // e0
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, // f0
];

#[rustfmt::skip]
const EUC_TW_STATES: [u8; 42] = [
    ERROR,  ERROR,  START,  3,      3,      3,      4, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  START,  ERROR,  START,  START,  START,  ERROR, // 3
    ERROR,  ERROR,  ERROR,  ERROR,  5,      ERROR,  ERROR, // 4
    ERROR,  START,  ERROR,  START,  START,  START,  ERROR, // 5
];

/// EUC-TW (CNS 11643).
pub const EUC_TW: SmModel = SmModel {
    class_table: &EUC_TW_CLASSES,
    class_factor: 7,
    state_table: &EUC_TW_STATES,
    char_len_table: &[0, 0, 1, 2, 2, 2, 3],
    name: "x-euc-tw",
};

const HZ_GB_2312_CLASSES: [u8; 256] = [
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 00
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 20
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 30
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 5, 2, 0, // 70
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 80
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 90
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // a0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // b0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // c0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // d0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // e0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // f0
];

#[rustfmt::skip]
const HZ_GB_2312_STATES: [u8; 48] = [
    START,  ERROR,  3,      START,  START,  START, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  START,  START,  4,      ERROR, // 3
    5,      ERROR,  6,      ERROR,  5,      5, // 4
    4,      ERROR,  4,      ERROR,  4,      4, // 5
    4,      ERROR,  4,      ERROR,  4,      ITS_ME, // 6
    START,  START,  START,  START,  START,  START, // 7
];

/// HZ-GB-2312 escape sequences (`~{` ... `~}`).
pub const HZ_GB_2312: SmModel = SmModel {
    class_table: &HZ_GB_2312_CLASSES,
    class_factor: 6,
    state_table: &HZ_GB_2312_STATES,
    char_len_table: &[0, 0, 0, 0, 0, 0],
    name: "HZ-GB-2312",
};

const ISO_2022_CN_CLASSES: [u8; 256] = [
    2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 00
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, // 20
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 30
    0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 70
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 80
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 90
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // e0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // f0
];

#[rustfmt::skip]
const ISO_2022_CN_STATES: [u8; 63] = [
    START,  3,      ERROR,  START,  START,  START,  START,  START,  START, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  ERROR,  4,      ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, // 3
    ERROR,  ERROR,  ERROR,  ERROR,  5,      6,      ERROR,  ERROR,  ERROR, // 4
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, ERROR,  ERROR, // 5
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, ERROR, // 6
];

/// ISO-2022-CN designations and shifts.
pub const ISO_2022_CN: SmModel = SmModel {
    class_table: &ISO_2022_CN_CLASSES,
    class_factor: 9,
    state_table: &ISO_2022_CN_STATES,
    char_len_table: &[0, 0, 0, 0, 0, 0, 0, 0, 0],
    name: "ISO-2022-CN",
};

const ISO_2022_JP_CLASSES: [u8; 256] = [
    2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, // 00
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 10
    0, 0, 0, 0, 7, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, // 20
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 30
    6, 0, 4, 0, 8, 0, 0, 0, 0, 9, 5, 0, 0, 0, 0, 0, // 40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 70
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 80
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 90
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // e0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // f0
];

#[rustfmt::skip]
const ISO_2022_JP_STATES: [u8; 70] = [
    START,  3,      ERROR,  START,  START,  START,  START,  START,  START,  START, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  ERROR,  5,      ERROR,  ERROR,  ERROR,  4,      ERROR,  ERROR, // 3
    ERROR,  ERROR,  ERROR,  6,      ITS_ME, ERROR,  ITS_ME, ERROR,  ERROR,  ERROR, // 4
    ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, ITS_ME, ERROR,  ERROR,  ERROR,  ITS_ME, // 5
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, ERROR, // 6
];

/// ISO-2022-JP escape sequences.
pub const ISO_2022_JP: SmModel = SmModel {
    class_table: &ISO_2022_JP_CLASSES,
    class_factor: 10,
    state_table: &ISO_2022_JP_STATES,
    char_len_table: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    name: "ISO-2022-JP",
};

const ISO_2022_KR_CLASSES: [u8; 256] = [
    2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 00
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 10
    0, 0, 0, 0, 3, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, // 20
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 30
    0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 70
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 80
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 90
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // a0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // b0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // c0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // d0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // e0
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // f0
];

#[rustfmt::skip]
const ISO_2022_KR_STATES: [u8; 36] = [
    START,  3,      ERROR,  START,  START,  START, // 0
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ERROR, // 1
    ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, // 2
    ERROR,  ERROR,  ERROR,  4,      ERROR,  ERROR, // 3
    ERROR,  ERROR,  ERROR,  ERROR,  5,      ERROR, // 4
    ERROR,  ERROR,  ERROR,  ERROR,  ERROR,  ITS_ME, // 5
];

/// ISO-2022-KR designation (`ESC $ ) C`).
pub const ISO_2022_KR: SmModel = SmModel {
    class_table: &ISO_2022_KR_CLASSES,
    class_factor: 6,
    state_table: &ISO_2022_KR_STATES,
    char_len_table: &[0, 0, 0, 0, 0, 0],
    name: "ISO-2022-KR",
};
