//! Property tests for the scoring heuristic.

use pps_model::ScoringRules;
use pps_practice::evaluate;
use proptest::prelude::*;

const REQUIREMENTS: [&str; 5] = [
    "타겟 독자층 명시",
    "주제 범위 설정",
    "트렌드 반영 요청",
    "양자 기반 키워드 분석 요청",
    "네이버 알고리즘 최적화 고려",
];

fn met(input: &str, requirement: &str) -> bool {
    let folded = input.to_lowercase();
    requirement
        .to_lowercase()
        .split_whitespace()
        .any(|word| folded.contains(word))
}

/// Drafts built from requirement words, markers and filler so every check
/// gets exercised.
fn draft() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "타겟", "독자층", "주제", "범위", "트렌드", "양자", "키워드", "네이버", "최적화",
        "예를 들어", "구체적", "예시", "블로그", "글", "재테크", "작성해주세요", "SEO", " ",
    ]);
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn score_is_exact_sum(input in draft()) {
        let rules = ScoringRules::default();
        let result = evaluate(&input, &REQUIREMENTS);

        let long = input.chars().count() > 100;
        let satisfied = REQUIREMENTS.iter().filter(|r| met(&input, r)).count() as u32;
        let specific = rules
            .specificity_markers
            .iter()
            .any(|m| input.to_lowercase().contains(m.as_str()));

        let expected = 20 * u32::from(long) + 15 * satisfied + 10 * u32::from(specific);
        prop_assert_eq!(result.score, expected);
    }

    #[test]
    fn short_input_never_gets_detail_strength(input in "\\PC{0,100}") {
        prop_assume!(input.chars().count() <= 100);
        let result = evaluate(&input, &REQUIREMENTS);
        prop_assert!(!result.strengths.iter().any(|s| s == "충분한 설명 제공"));
        prop_assert_eq!(result.weaknesses.first().map(String::as_str), Some("설명이 부족함"));
        prop_assert_eq!(
            result.suggestions.first().map(String::as_str),
            Some("더 자세한 설명을 추가해보세요")
        );
    }

    #[test]
    fn long_input_gets_detail_strength(input in "\\PC{101,200}") {
        let with_filler = evaluate(&input, &[] as &[&str]);
        prop_assert_eq!(with_filler.strengths.first().map(String::as_str), Some("충분한 설명 제공"));
        prop_assert!(with_filler.score >= 20);
        prop_assert!(!with_filler.weaknesses.iter().any(|w| w == "설명이 부족함"));
    }

    #[test]
    fn requirement_lines_are_exclusive(input in draft()) {
        let result = evaluate(&input, &REQUIREMENTS);
        for requirement in REQUIREMENTS {
            let strength = format!("{requirement} 요구사항 충족");
            let weakness = format!("{requirement} 관련 내용 누락");
            let suggestion = format!("{requirement}에 대한 내용을 추가해보세요");

            let has_strength = result.strengths.contains(&strength);
            prop_assert_eq!(has_strength, met(&input, requirement));
            prop_assert_eq!(result.weaknesses.contains(&weakness), !has_strength);
            prop_assert_eq!(result.suggestions.contains(&suggestion), !has_strength);
        }
    }
}
