use std::fmt;

/// A detected structural region of the input text.
///
/// The active section decides which extraction rules apply to the content
/// lines that follow its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Goals and high-level objectives.
    Objectives,
    /// Technologies and technical skills.
    Skills,
    /// Prior work and project experience.
    Experience,
    /// Academic background.
    Education,
    /// Personal interests and hobbies.
    Interests,
}

/// Header keywords for each section, in precedence order.
///
/// Declaration order is part of the contract: headers are matched against
/// each entry in turn and the first section with a matching keyword wins, so
/// a line such as "Skills and Experience" is always a skills header.
const KEYWORDS: &[(Section, &[&str])] = &[
    (Section::Objectives, &["objectives", "objective", "summary"]),
    (Section::Skills, &["skills", "technical skills", "expertise"]),
    (
        Section::Experience,
        &["experience", "work experience", "professional experience"],
    ),
    (Section::Education, &["education", "academic background"]),
    (Section::Interests, &["interests", "hobbies"]),
];

impl Section {
    /// Returns the section whose header keywords match the given line, if
    /// any.
    ///
    /// Keywords match case-insensitively and as substrings, so
    /// "Technical Skills:" and "skills" both detect [`Section::Skills`].
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        let line = line.to_lowercase();
        KEYWORDS.iter().find_map(|&(section, keywords)| {
            keywords
                .iter()
                .any(|keyword| line.contains(keyword))
                .then_some(section)
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Objectives => "objectives",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Interests => "interests",
        };
        f.write_str(name)
    }
}
