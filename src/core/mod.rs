//! 한글 문자 처리 핵심 모듈

pub mod irregular;
pub mod jamo;
pub mod unicode;

pub use irregular::{apply_irregular, conjugate, IrregularType, StemCandidate};
pub use jamo::{
    change_batchim, compose, decompose, decompose_all, extract_cho, get_batchim, has_batchim,
    has_last_batchim, is_hangul, is_jamo, pick_particle, pick_ro, remove_batchim,
    split_double_jong, JamoTriple,
};
