use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three ESG pillars, in the order the catalog presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Environmental => 'E',
            Self::Social => 'S',
            Self::Governance => 'G',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'E' => Some(Self::Environmental),
            'S' => Some(Self::Social),
            'G' => Some(Self::Governance),
            _ => None,
        }
    }
}

/// Positional identifier such as `E.1.2` (pillar, 1-based section, 1-based question).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    pub pillar: Pillar,
    pub section: u8,
    pub question: u8,
}

impl QuestionId {
    pub const fn new(pillar: Pillar, section: u8, question: u8) -> Self {
        Self {
            pillar,
            section,
            question,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.pillar.letter(),
            self.section,
            self.question
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a question identifier of the form <E|S|G>.<section>.<question>")]
pub struct QuestionIdParseError(pub String);

impl FromStr for QuestionId {
    type Err = QuestionIdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || QuestionIdParseError(raw.to_string());
        let mut parts = raw.trim().split('.');

        let pillar = parts
            .next()
            .and_then(|part| {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Pillar::from_letter(letter),
                    _ => None,
                }
            })
            .ok_or_else(invalid)?;
        let section = parts
            .next()
            .and_then(|part| part.parse::<u8>().ok())
            .filter(|value| *value > 0)
            .ok_or_else(invalid)?;
        let question = parts
            .next()
            .and_then(|part| part.parse::<u8>().ok())
            .filter(|value| *value > 0)
            .ok_or_else(invalid)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(pillar, section, question))
    }
}

impl Serialize for QuestionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The governance question whose answer gates the whistleblower performance metric.
pub const WHISTLEBLOWER_MECHANISM: QuestionId = QuestionId::new(Pillar::Governance, 2, 1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub section_title: &'static str,
    pub text: &'static str,
}

#[derive(Debug)]
pub struct SectionTemplate {
    pub title: &'static str,
    pub questions: Vec<&'static str>,
}

#[derive(Debug)]
struct PillarTemplate {
    pillar: Pillar,
    sections: Vec<SectionTemplate>,
}

/// Immutable, ordered set of disclosure questions.
#[derive(Debug)]
pub struct QuestionCatalog {
    pillars: Vec<PillarTemplate>,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self::from_sections(standard_sections())
    }

    /// Builds a catalog from `(pillar, sections)` pairs; identifiers come from position.
    pub fn from_sections(layout: Vec<(Pillar, Vec<SectionTemplate>)>) -> Self {
        let pillars: Vec<PillarTemplate> = layout
            .into_iter()
            .map(|(pillar, sections)| PillarTemplate { pillar, sections })
            .collect();

        let mut questions = Vec::new();
        for template in &pillars {
            for (section_index, section) in template.sections.iter().enumerate() {
                for (question_index, text) in section.questions.iter().copied().enumerate() {
                    questions.push(Question {
                        id: QuestionId::new(
                            template.pillar,
                            position(section_index),
                            position(question_index),
                        ),
                        pillar: template.pillar,
                        section_title: section.title,
                        text,
                    });
                }
            }
        }

        Self { pillars, questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_for(&self, pillar: Pillar) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.pillar == pillar)
    }

    pub fn sections(&self, pillar: Pillar) -> &[SectionTemplate] {
        self.pillars
            .iter()
            .find(|template| template.pillar == pillar)
            .map(|template| template.sections.as_slice())
            .unwrap_or(&[])
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn pillar_question_count(&self, pillar: Pillar) -> usize {
        self.questions_for(pillar).count()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == *id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.get(id).is_some()
    }
}

fn position(index: usize) -> u8 {
    u8::try_from(index + 1).unwrap_or(u8::MAX)
}

fn section(title: &'static str, questions: Vec<&'static str>) -> SectionTemplate {
    SectionTemplate { title, questions }
}

fn standard_sections() -> Vec<(Pillar, Vec<SectionTemplate>)> {
    vec![
        (
            Pillar::Environmental,
            vec![
                section(
                    "Energy & Emissions",
                    vec![
                        "Is the company actively increasing the share of renewable energy in its total energy consumption?",
                        "Does the company measure and manage Scope 1, 2, and 3 emissions as part of a structured emissions-reduction strategy?",
                        "Has the company set measurable and time-bound GHG reduction targets aligned with industry or national climate goals?",
                        "Does the company demonstrate year-on-year reduction or stable performance in Scope 1 and Scope 2 emissions?",
                    ],
                ),
                section(
                    "Water Management",
                    vec![
                        "Does the company show responsible water usage through reductions, recycling, or efficiency improvements?",
                        "Does the company proactively assess and mitigate water-related risks in high water-stress regions?",
                    ],
                ),
                section(
                    "Waste & Resource Management",
                    vec![
                        "Is the company increasing the proportion of waste that is recycled or reused instead of sent to landfill?",
                    ],
                ),
                section(
                    "Pollution & Compliance",
                    vec![
                        "Has the company maintained a clean environmental compliance record with minimal or no penalties in the last three years?",
                        "Does the company maintain certified environmental management systems (e.g., ISO 14001) to ensure continued compliance?",
                    ],
                ),
                section(
                    "Energy Efficiency & Biodiversity",
                    vec![
                        "Does the company actively implement energy-efficiency initiatives to reduce energy intensity over time?",
                        "Has the company identified and taken steps to protect biodiversity in ecologically sensitive operating regions?",
                    ],
                ),
            ],
        ),
        (
            Pillar::Social,
            vec![
                section(
                    "Workforce Composition & Diversity",
                    vec![
                        "Does the company demonstrate a healthy gender balance that is reasonable for the industry?",
                        "Is the representation of women in managerial roles improving or maintained at a competitive level relative to industry norms?",
                    ],
                ),
                section(
                    "Employee Wellbeing, Training & Safety",
                    vec![
                        "Is the company's workplace injury rate (LTI/LTIFR) low compared to industry benchmarks?",
                        "Does the company provide sufficient annual training hours to support employee development across all levels?",
                        "Is the company certified under recognized occupational health and safety standards (e.g., ISO 45001)?",
                    ],
                ),
                section(
                    "Human Rights & Labour Standards",
                    vec![
                        "Are there strong human-rights practices in place with no indicators of child or forced labour risks?",
                        "Does the company consistently comply with statutory labour laws (working hours, wages, benefits)?",
                        "Does the company have mechanisms to identify and address labour-related grievances effectively?",
                    ],
                ),
                section(
                    "Social Impact & Community Relations",
                    vec![
                        "Does the company deliver CSR initiatives that show measurable community impact?",
                        "Does the company ensure timely and effective resolution of customer grievances?",
                    ],
                ),
                section(
                    "Pay Equality & Turnover",
                    vec![
                        "Is the gender pay gap within a reasonable range, indicating fair compensation practices?",
                    ],
                ),
            ],
        ),
        (
            Pillar::Governance,
            vec![
                section(
                    "Board Structure & Oversight",
                    vec![
                        "Does the company maintain a well-balanced board with adequate independent and women directors?",
                        "Is there a competency matrix showing that board members possess relevant and diverse expertise?",
                        "Is ESG oversight integrated at the board or senior leadership level?",
                    ],
                ),
                section(
                    "Ethical Business Conduct & Transparency",
                    vec![
                        "Does the company maintain an effective whistleblower mechanism with prompt investigations?",
                        "Is the company actively training employees and directors on anti-corruption and ethical conduct?",
                        "Does the company consistently publish audited financial statements without delays or qualifications?",
                    ],
                ),
                section(
                    "Executive Compensation",
                    vec![
                        "Is executive compensation aligned with long-term business sustainability and ESG goals?",
                    ],
                ),
                section(
                    "Risk Management & Internal Controls",
                    vec![
                        "Does the company identify and manage ESG-related risks through defined mitigation strategies?",
                        "Does the company maintain a robust enterprise risk-management (ERM) framework?",
                    ],
                ),
                section(
                    "Compliance & Legal",
                    vec![
                        "Has the company maintained a strong legal compliance record with limited penalties or litigations?",
                        "Does the company have a strong data-protection and cybersecurity program?",
                    ],
                ),
                section(
                    "Supply Chain Governance",
                    vec![
                        "Does the company evaluate suppliers for ESG risks and compliance?",
                        "Has the company demonstrated awareness and mitigation of ESG risks within its supply chain?",
                    ],
                ),
            ],
        ),
    ]
}
