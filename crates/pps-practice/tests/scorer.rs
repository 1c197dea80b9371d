//! Scoring tests against the reference exercise content.

use pps_practice::{FeedbackScorer, Finding, evaluate};

const TOPIC_REQUIREMENTS: [&str; 5] = [
    "타겟 독자층 명시",
    "주제 범위 설정",
    "트렌드 반영 요청",
    "양자 기반 키워드 분석 요청",
    "네이버 알고리즘 최적화 고려",
];

/// Over 100 characters, contains "예를 들어", and meets only the first three
/// topic requirements.
const THREE_OF_FIVE: &str = "직장인 독자층을 위한 재테크 주제를 정리해주세요. 최근 트렌드를 담아 주시고, \
     예를 들어 월급 관리나 소비 습관 같은 사례를 넣어 주세요. \
     글은 친근한 말투로 쓰고 각 항목마다 짧은 설명을 붙여 주세요.";

#[test]
fn test_empty_input_scores_zero_with_full_feedback() {
    let result = evaluate("", &TOPIC_REQUIREMENTS);

    assert_eq!(result.score, 0);
    assert!(result.strengths.is_empty());
    assert_eq!(result.weaknesses.len(), 6);
    assert_eq!(result.suggestions.len(), 7);

    assert_eq!(result.weaknesses[0], "설명이 부족함");
    assert_eq!(result.suggestions[0], "더 자세한 설명을 추가해보세요");
    assert_eq!(
        result.suggestions.last().map(String::as_str),
        Some("더 구체적인 예시나 설명을 추가해보세요")
    );
}

#[test]
fn test_three_of_five_with_marker_scores_75() {
    assert!(THREE_OF_FIVE.chars().count() > 100);

    let result = evaluate(THREE_OF_FIVE, &TOPIC_REQUIREMENTS);

    assert_eq!(result.score, 75);
    assert_eq!(
        result.strengths,
        vec![
            "충분한 설명 제공",
            "타겟 독자층 명시 요구사항 충족",
            "주제 범위 설정 요구사항 충족",
            "트렌드 반영 요청 요구사항 충족",
            "구체적인 설명 포함",
        ]
    );
    assert_eq!(
        result.weaknesses,
        vec![
            "양자 기반 키워드 분석 요청 관련 내용 누락",
            "네이버 알고리즘 최적화 고려 관련 내용 누락",
        ]
    );
    assert_eq!(
        result.suggestions,
        vec![
            "양자 기반 키워드 분석 요청에 대한 내용을 추가해보세요",
            "네이버 알고리즘 최적화 고려에 대한 내용을 추가해보세요",
        ]
    );
}

#[test]
fn test_reference_examples() {
    let catalog = pps_content::load_embedded().unwrap();
    let scorer = FeedbackScorer::new(catalog.scoring.clone());

    let topic = &catalog.steps[0];
    assert_eq!(
        scorer.evaluate(&topic.example.good, &topic.requirements).score,
        95
    );
    assert_eq!(
        scorer.evaluate(&topic.example.bad, &topic.requirements).score,
        15
    );

    let structure = &catalog.steps[1];
    assert_eq!(
        scorer
            .evaluate(&structure.example.good, &structure.requirements)
            .score,
        80
    );
}

#[test]
fn test_score_is_not_clamped() {
    // Known quirk: eight satisfied requirements push the score past 100.
    let requirements: Vec<String> = (0..8).map(|i| format!("항목{i}")).collect();
    let input = format!("{} 예시", requirements.join(" ")).repeat(3);

    let result = evaluate(&input, &requirements);

    assert_eq!(result.score, 20 + 8 * 15 + 10);
    assert!(result.exceeds_nominal_max());
}

#[test]
fn test_requirement_order_only_changes_line_order() {
    let reversed: Vec<&str> = TOPIC_REQUIREMENTS.iter().rev().copied().collect();

    let forward = evaluate(THREE_OF_FIVE, &TOPIC_REQUIREMENTS);
    let backward = evaluate(THREE_OF_FIVE, &reversed);

    assert_eq!(forward.score, backward.score);
    assert_eq!(backward.strengths[1], "트렌드 반영 요청 요구사항 충족");
    assert_eq!(backward.weaknesses[0], "네이버 알고리즘 최적화 고려 관련 내용 누락");
}

#[test]
fn test_findings_follow_check_order() {
    let findings = FeedbackScorer::default().analyze("트렌드", &["트렌드 반영", "양자 기반"]);

    assert_eq!(
        findings,
        vec![
            Finding::DetailInsufficient,
            Finding::RequirementMet {
                requirement: "트렌드 반영".to_string()
            },
            Finding::RequirementMissing {
                requirement: "양자 기반".to_string()
            },
            Finding::SpecificityMissing,
        ]
    );
}

#[test]
fn test_evaluation_json_snapshot() {
    let result = evaluate("예시를 들어 설명해주세요", &["섹션별 구성 요청"]);

    insta::assert_json_snapshot!(result, @r#"
    {
      "score": 10,
      "strengths": [
        "구체적인 설명 포함"
      ],
      "weaknesses": [
        "설명이 부족함",
        "섹션별 구성 요청 관련 내용 누락"
      ],
      "suggestions": [
        "더 자세한 설명을 추가해보세요",
        "섹션별 구성 요청에 대한 내용을 추가해보세요"
      ]
    }
    "#);
}
