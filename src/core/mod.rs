//! 한글 로마자 표기 엔진
//!
//! 음절 코덱, 기본 표기 표, 문맥 규칙 엔진, 문장 변환기로 구성된다.

pub mod jamo;
pub mod options;
pub mod renderer;
pub mod rules;
pub mod syllable;
pub mod tables;
pub mod unicode;
