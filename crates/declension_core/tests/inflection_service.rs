use declension_core::{
    AnalyzerError, AnalyzerResult, CaseTag, InflectionResult, InflectionService, MorphAnalyzer,
};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// Analyzer answering from fixed tables, with optional forced failures.
#[derive(Default)]
struct ScriptedAnalyzer {
    candidates: HashMap<String, Vec<String>>,
    forms: HashMap<(String, CaseTag), String>,
    failing_cases: HashSet<CaseTag>,
    fail_parse: bool,
    inflect_calls: RefCell<Vec<(String, CaseTag)>>,
}

impl ScriptedAnalyzer {
    fn with_lexeme(mut self, text: &str, lexeme: &str, forms: &[(CaseTag, &str)]) -> Self {
        self.candidates
            .entry(text.to_string())
            .or_default()
            .push(lexeme.to_string());
        for (case, form) in forms {
            self.forms
                .insert((lexeme.to_string(), *case), (*form).to_string());
        }
        self
    }

    fn failing_on(mut self, case: CaseTag) -> Self {
        self.failing_cases.insert(case);
        self
    }

    fn failing_parse(mut self) -> Self {
        self.fail_parse = true;
        self
    }
}

impl MorphAnalyzer for ScriptedAnalyzer {
    type Candidate = String;

    fn parse(&self, text: &str) -> AnalyzerResult<Vec<String>> {
        if self.fail_parse {
            return Err(AnalyzerError::Backend("forced parse failure".to_string()));
        }
        Ok(self.candidates.get(text).cloned().unwrap_or_default())
    }

    fn inflect(&self, candidate: &String, case: CaseTag) -> AnalyzerResult<Option<String>> {
        self.inflect_calls
            .borrow_mut()
            .push((candidate.clone(), case));
        if self.failing_cases.contains(&case) {
            return Err(AnalyzerError::Backend(format!("forced failure for {case}")));
        }
        Ok(self.forms.get(&(candidate.clone(), case)).cloned())
    }
}

const KNIGA_FORMS: [(CaseTag, &str); 6] = [
    (CaseTag::Nominative, "книга"),
    (CaseTag::Genitive, "книги"),
    (CaseTag::Dative, "книге"),
    (CaseTag::Accusative, "книгу"),
    (CaseTag::Instrumental, "книгой"),
    (CaseTag::Prepositional, "книге"),
];

fn kniga_analyzer() -> ScriptedAnalyzer {
    ScriptedAnalyzer::default().with_lexeme("книга", "книга#noun", &KNIGA_FORMS)
}

fn assert_total(result: &InflectionResult) {
    let json = serde_json::to_value(result).expect("result should serialize");
    let keys: BTreeSet<&str> = json
        .as_object()
        .expect("result should be a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    let expected: BTreeSet<&str> = ["nomn", "gent", "datv", "accs", "ablt", "loct"]
        .into_iter()
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn full_paradigm_replaces_every_case() {
    let service = InflectionService::new(kniga_analyzer());
    let result = service.declension("книга");

    assert_total(&result);
    for (case, form) in KNIGA_FORMS {
        assert_eq!(result.get(case), form);
    }
    assert_ne!(result.get(CaseTag::Genitive), result.get(CaseTag::Nominative));
    assert_ne!(result.get(CaseTag::Dative), result.get(CaseTag::Nominative));
    assert_ne!(result.get(CaseTag::Accusative), result.get(CaseTag::Nominative));
}

#[test]
fn no_candidates_returns_exact_baseline() {
    let service = InflectionService::new(kniga_analyzer());
    let result = service.declension("ё");

    assert_total(&result);
    assert_eq!(result, InflectionResult::baseline("ё"));
    assert!(service.analyzer().inflect_calls.borrow().is_empty());
}

#[test]
fn parse_failure_returns_exact_baseline() {
    let service = InflectionService::new(kniga_analyzer().failing_parse());
    let result = service.declension("книга");

    assert_eq!(result, InflectionResult::baseline("книга"));
}

#[test]
fn missing_forms_fall_back_to_input() {
    let analyzer = ScriptedAnalyzer::default().with_lexeme(
        "сани",
        "сани#noun",
        &[
            (CaseTag::Genitive, "саней"),
            (CaseTag::Dative, ""),
            (CaseTag::Instrumental, "санями"),
        ],
    );
    let service = InflectionService::new(analyzer);
    let result = service.declension("сани");

    assert_total(&result);
    assert_eq!(result.get(CaseTag::Genitive), "саней");
    assert_eq!(result.get(CaseTag::Instrumental), "санями");
    assert_eq!(result.get(CaseTag::Nominative), "сани");
    assert_eq!(result.get(CaseTag::Dative), "сани");
    assert_eq!(result.get(CaseTag::Accusative), "сани");
    assert_eq!(result.get(CaseTag::Prepositional), "сани");
    for (_, form) in result.iter() {
        assert!(!form.is_empty());
    }
}

#[test]
fn failing_case_does_not_affect_other_cases() {
    let healthy = InflectionService::new(kniga_analyzer()).declension("книга");
    let service = InflectionService::new(kniga_analyzer().failing_on(CaseTag::Dative));
    let degraded = service.declension("книга");

    assert_total(&degraded);
    assert_eq!(degraded.get(CaseTag::Dative), "книга");
    for case in CaseTag::ALL {
        if case != CaseTag::Dative {
            assert_eq!(degraded.get(case), healthy.get(case), "case {case} changed");
        }
    }
    // Every case is still attempted after the failure.
    assert_eq!(service.analyzer().inflect_calls.borrow().len(), CaseTag::COUNT);
}

#[test]
fn only_first_candidate_is_inflected() {
    let analyzer = ScriptedAnalyzer::default()
        .with_lexeme(
            "стали",
            "сталь#noun",
            &[(CaseTag::Nominative, "сталь"), (CaseTag::Genitive, "стали")],
        )
        .with_lexeme(
            "стали",
            "стать#verb",
            &[(CaseTag::Nominative, "стать"), (CaseTag::Dative, "стану")],
        );
    let service = InflectionService::new(analyzer);
    let result = service.declension("стали");

    assert_eq!(result.get(CaseTag::Nominative), "сталь");
    assert_eq!(result.get(CaseTag::Dative), "стали");
    let calls = service.analyzer().inflect_calls.borrow();
    assert!(calls.iter().all(|(lexeme, _)| lexeme == "сталь#noun"));
    let cases: Vec<CaseTag> = calls.iter().map(|(_, case)| *case).collect();
    assert_eq!(cases, CaseTag::ALL.to_vec());
}

#[test]
fn repeated_calls_are_deterministic() {
    let service = InflectionService::new(kniga_analyzer().failing_on(CaseTag::Accusative));
    let first = service.declension("книга");
    let second = service.declension("книга");

    assert_eq!(first, second);
}

#[test]
fn accepts_borrowed_boxed_and_shared_analyzers() {
    let analyzer = kniga_analyzer();
    let borrowed = InflectionService::new(&analyzer).declension("книга");

    let boxed = InflectionService::new(Box::new(kniga_analyzer())).declension("книга");
    let shared = InflectionService::new(Arc::new(kniga_analyzer())).declension("книга");

    assert_eq!(borrowed, boxed);
    assert_eq!(borrowed, shared);
    assert_eq!(borrowed.get(CaseTag::Instrumental), "книгой");
}
