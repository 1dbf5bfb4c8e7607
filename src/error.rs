//! 로마자 변환 에러 타입

/// 로마자 변환 및 설정 처리 에러
#[derive(Debug)]
pub enum RomanizeError {
    /// 필수 인자가 없거나 음절 구성 요소가 빠짐
    InvalidArgument(String),
    /// 설정 파일 직렬화/역직렬화 실패
    Config(String),
    /// 파일 입출력 실패
    Io(std::io::Error),
}

impl std::fmt::Display for RomanizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RomanizeError::InvalidArgument(s) => write!(f, "잘못된 인자: {}", s),
            RomanizeError::Config(s) => write!(f, "설정 오류: {}", s),
            RomanizeError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
        }
    }
}

impl std::error::Error for RomanizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RomanizeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RomanizeError {
    fn from(e: std::io::Error) -> Self {
        RomanizeError::Io(e)
    }
}
