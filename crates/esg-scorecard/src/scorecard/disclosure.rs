use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{Pillar, QuestionCatalog, QuestionId};
use super::validation::ValidationError;

/// Explicit yes/no answers keyed by question. Missing keys are unanswered questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureSheet {
    answers: BTreeMap<QuestionId, bool>,
}

impl DisclosureSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, rejecting identifiers the catalog does not define.
    pub fn answer(
        &mut self,
        catalog: &QuestionCatalog,
        id: QuestionId,
        yes: bool,
    ) -> Result<(), ValidationError> {
        if !catalog.contains(&id) {
            return Err(ValidationError::UnknownQuestion(id.to_string()));
        }
        self.answers.insert(id, yes);
        Ok(())
    }

    pub fn from_answers<I>(catalog: &QuestionCatalog, answers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (QuestionId, bool)>,
    {
        let mut sheet = Self::new();
        for (id, yes) in answers {
            sheet.answer(catalog, id, yes)?;
        }
        Ok(sheet)
    }

    /// Answers every catalog question with the same value.
    pub fn uniform(catalog: &QuestionCatalog, yes: bool) -> Self {
        Self {
            answers: catalog
                .questions()
                .iter()
                .map(|question| (question.id, yes))
                .collect(),
        }
    }

    pub fn get(&self, id: &QuestionId) -> Option<bool> {
        self.answers.get(id).copied()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, bool)> + '_ {
        self.answers.iter().map(|(id, yes)| (*id, *yes))
    }
}

/// Yes-count for one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarTally {
    pub pillar: Pillar,
    pub yes: u32,
    pub total: u32,
    pub percent: f64,
}

impl PillarTally {
    fn new(pillar: Pillar, yes: u32, total: u32) -> Self {
        let percent = if total > 0 {
            f64::from(yes) / f64::from(total) * 100.0
        } else {
            0.0
        };
        Self {
            pillar,
            yes,
            total,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisclosureSummary {
    pub pillars: Vec<PillarTally>,
    pub total_yes: u32,
    pub question_count: u32,
    #[serde(skip)]
    whistleblower_mechanism: bool,
}

impl DisclosureSummary {
    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarTally> {
        self.pillars.iter().find(|tally| tally.pillar == pillar)
    }

    /// Whether the governance whistleblower-mechanism question was answered "Yes".
    pub fn whistleblower_mechanism_disclosed(&self) -> bool {
        self.whistleblower_mechanism
    }
}

pub struct DisclosureScorer;

impl DisclosureScorer {
    /// Every catalog question needs an explicit answer; a matching count alone is not enough.
    pub fn validate(
        catalog: &QuestionCatalog,
        sheet: &DisclosureSheet,
    ) -> Result<(), ValidationError> {
        let answered = catalog
            .questions()
            .iter()
            .filter(|question| sheet.get(&question.id).is_some())
            .count();
        let expected = catalog.question_count();

        if answered != expected || sheet.answered() != expected {
            return Err(ValidationError::IncompleteDisclosure { answered, expected });
        }
        Ok(())
    }

    /// Sums "Yes" answers per pillar. Unanswered questions count as "No".
    pub fn score(catalog: &QuestionCatalog, sheet: &DisclosureSheet) -> DisclosureSummary {
        let pillars: Vec<PillarTally> = Pillar::ordered()
            .into_iter()
            .map(|pillar| {
                let mut yes = 0u32;
                let mut total = 0u32;
                for question in catalog.questions_for(pillar) {
                    total += 1;
                    if sheet.get(&question.id) == Some(true) {
                        yes += 1;
                    }
                }
                PillarTally::new(pillar, yes, total)
            })
            .collect();

        let total_yes = pillars.iter().map(|tally| tally.yes).sum();
        let question_count = pillars.iter().map(|tally| tally.total).sum();

        DisclosureSummary {
            pillars,
            total_yes,
            question_count,
            whistleblower_mechanism: sheet.get(&super::catalog::WHISTLEBLOWER_MECHANISM)
                == Some(true),
        }
    }
}
