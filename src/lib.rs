pub mod config;
pub mod core;
pub mod error;
pub mod normalize;

pub use crate::core::options::{ConsonantAssimilation, RenderOptions, WordCategory};
pub use crate::core::renderer::Romanizer;
pub use crate::core::syllable::{Character, Syllable};
pub use crate::error::RomanizeError;

/// 한글 문자열을 로마자로 변환 (일반 단어, 역행 동화, 기본 표기 옵션)
pub fn romanize(text: &str) -> String {
    romanize_with(text, WordCategory::Typical, ConsonantAssimilation::Regressive)
}

/// 단어 유형과 자음동화 방향을 지정해 변환
pub fn romanize_with(
    text: &str,
    category: WordCategory,
    assimilation: ConsonantAssimilation,
) -> String {
    Romanizer::default().romanize(text, category, assimilation)
}

/// 인자가 빠질 수 있는 호출용 변환
///
/// 텍스트가 없으면 `InvalidArgument`, 옵션이 없으면 기본값을 쓴다.
pub fn try_romanize(
    text: Option<&str>,
    category: Option<WordCategory>,
    assimilation: Option<ConsonantAssimilation>,
) -> Result<String, RomanizeError> {
    let text = text.ok_or_else(|| {
        RomanizeError::InvalidArgument("String should not be null.".to_string())
    })?;
    Ok(romanize_with(
        text,
        category.unwrap_or_default(),
        assimilation.unwrap_or_default(),
    ))
}
