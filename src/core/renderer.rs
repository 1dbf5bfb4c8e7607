//! 문장 단위 로마자 변환기
//!
//! 입력을 한 글자씩 읽으며 (앞, 현재, 뒤) 세 칸 창을 밀어 가고,
//! 한글 음절마다 규칙 엔진을 호출한다. 한글이 아닌 문자는 그대로 출력한다.

use crate::config::RomanizerConfig;
use crate::core::options::{ConsonantAssimilation, RenderOptions, WordCategory};
use crate::core::rules::{romanize_syllable, RuleContext};
use crate::core::syllable::{Character, Syllable};

/// 세 칸 슬라이딩 창
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub prev: Option<Character>,
    pub current: Character,
    pub next: Option<Character>,
}

impl Window {
    /// 첫 글자로 창 생성
    pub fn start(current: Character, next: Option<Character>) -> Self {
        Self {
            prev: None,
            current,
            next,
        }
    }

    /// 한 칸 이동 (다음 글자가 없으면 None)
    pub fn advance(self, incoming: Option<Character>) -> Option<Self> {
        let current = self.next?;
        Some(Self {
            prev: Some(self.current),
            current,
            next: incoming,
        })
    }

    /// 규칙 엔진에 넘길 이웃 음절
    ///
    /// 인명은 음절마다 독립적으로 읽으므로 이웃을 비운다.
    pub fn neighbors(&self, category: WordCategory) -> (Option<Syllable>, Option<Syllable>) {
        if category.is_name() {
            return (None, None);
        }
        (
            self.prev.and_then(Character::syllable),
            self.next.and_then(Character::syllable),
        )
    }

    /// 로마자 구간의 시작인지 (앞 글자가 없거나 한글이 아님)
    pub fn starts_run(&self) -> bool {
        !matches!(self.prev, Some(Character::Hangul(_)))
    }
}

/// 문장 로마자 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct Romanizer {
    options: RenderOptions,
}

impl Romanizer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &RomanizerConfig) -> Self {
        Self::new(config.render_options())
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// 단어 유형별 전처리 후 변환
    pub fn romanize(
        &self,
        text: &str,
        category: WordCategory,
        assimilation: ConsonantAssimilation,
    ) -> String {
        let normalized = crate::normalize::normalize(text, category);
        self.render(&normalized, category, assimilation)
    }

    /// 전처리 없이 변환
    pub fn render(
        &self,
        text: &str,
        category: WordCategory,
        assimilation: ConsonantAssimilation,
    ) -> String {
        let ctx = RuleContext::new(category, assimilation)
            .with_vowel_hyphen(self.options.hyphen_on_ambiguous_vowel);
        let mut out = String::with_capacity(text.len() * 3);

        let mut chars = text.chars().map(Character::decompose);
        let Some(first) = chars.next() else {
            return out;
        };
        let mut window = Some(Window::start(first, chars.next()));

        while let Some(w) = window {
            match w.current {
                Character::Hangul(syllable) => {
                    let (prev, next) = w.neighbors(category);
                    let fragment = romanize_syllable(prev, syllable, next, &ctx);
                    log::trace!("{} -> {}", syllable.to_char(), fragment);
                    if w.starts_run() && self.should_capitalize(&w, category) {
                        push_capitalized(&mut out, &fragment);
                    } else {
                        out.push_str(&fragment);
                    }
                }
                Character::Other(c) => out.push(c),
            }
            window = w.advance(chars.next());
        }

        out
    }

    fn should_capitalize(&self, window: &Window, category: WordCategory) -> bool {
        if !self.options.capitalize_first_letter {
            return false;
        }
        // 주소의 붙임표/숫자 뒤 구간은 소문자 유지 (Haeundae-gu, 1-ga)
        if category == WordCategory::District {
            if let Some(Character::Other(c)) = window.prev {
                return !(c == '-' || c.is_ascii_digit());
            }
        }
        true
    }
}

fn push_capitalized(out: &mut String, fragment: &str) {
    let mut chars = fragment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        Romanizer::default().render(text, WordCategory::Typical, ConsonantAssimilation::Regressive)
    }

    #[test]
    fn test_window_advance() {
        let a = Character::decompose('가');
        let b = Character::decompose('b');
        let c = Character::decompose('다');

        let w = Window::start(a, Some(b));
        assert!(w.starts_run());
        let w = w.advance(Some(c)).unwrap();
        assert_eq!(w.prev, Some(a));
        assert_eq!(w.current, b);
        assert_eq!(w.next, Some(c));
        let w = w.advance(None).unwrap();
        assert_eq!(w.current, c);
        assert!(w.starts_run());
        assert!(w.advance(None).is_none());
    }

    #[test]
    fn test_name_neighbors_are_cleared() {
        let w = Window {
            prev: Some(Character::decompose('이')),
            current: Character::decompose('지'),
            next: Some(Character::decompose('은')),
        };
        assert_eq!(w.neighbors(WordCategory::Name), (None, None));
        assert_eq!(w.neighbors(WordCategory::NameTypical), (None, None));
        let (prev, next) = w.neighbors(WordCategory::Typical);
        assert!(prev.is_some() && next.is_some());
    }

    #[test]
    fn test_empty_and_passthrough() {
        assert_eq!(render(""), "");
        assert_eq!(render("Hello, world! 123"), "Hello, world! 123");
        assert_eq!(render("ㄱㅏ"), "ㄱㅏ");
    }

    #[test]
    fn test_capitalize_each_run() {
        assert_eq!(render("설악산"), "Seoraksan");
        assert_eq!(render("조사 착수"), "Josa Chaksu");
        assert_eq!(render("Motorola의"), "MotorolaUi");
    }

    #[test]
    fn test_no_assimilation_across_passthrough() {
        // 공백을 사이에 두면 앞뒤 음절이 서로 영향을 주지 않음
        assert_eq!(render("신 라"), "Sin Ra");
        assert_eq!(render("신라"), "Silla");
    }

    #[test]
    fn test_capitalize_disabled() {
        let romanizer = Romanizer::new(RenderOptions::new().with_capitalize(false));
        assert_eq!(
            romanizer.render("남용에 대해", WordCategory::Typical, ConsonantAssimilation::Regressive),
            "namyong-e daehae"
        );
    }

    #[test]
    fn test_vowel_hyphen_disabled() {
        let romanizer = Romanizer::new(RenderOptions::new().with_vowel_hyphen(false));
        assert_eq!(
            romanizer.render("해운대", WordCategory::Typical, ConsonantAssimilation::Regressive),
            "Haeundae"
        );
        // 자음 붙임표는 유지
        assert_eq!(
            romanizer.render("중앙", WordCategory::Typical, ConsonantAssimilation::Regressive),
            "Jung-ang"
        );
    }

    #[test]
    fn test_district_lowercase_after_hyphen_or_digit() {
        let romanizer = Romanizer::default();
        assert_eq!(
            romanizer.render("해운대-구", WordCategory::District, ConsonantAssimilation::Regressive),
            "Hae-undae-gu"
        );
        assert_eq!(
            romanizer.render("종로 1-가", WordCategory::District, ConsonantAssimilation::Regressive),
            "Jongno 1-ga"
        );
        // 주소가 아니면 붙임표 뒤도 대문자
        assert_eq!(render("해운대-구"), "Hae-undae-Gu");
    }

    #[test]
    fn test_name_isolation_in_render() {
        let romanizer = Romanizer::default();
        assert_eq!(
            romanizer.render("이 지은", WordCategory::Name, ConsonantAssimilation::Regressive),
            "I Jieun"
        );
        assert_eq!(
            romanizer.render("한 복남", WordCategory::Name, ConsonantAssimilation::Regressive),
            "Han Boknam"
        );
        assert_eq!(render("복남"), "Bongnam");
    }
}
