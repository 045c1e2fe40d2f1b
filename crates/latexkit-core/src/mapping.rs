//! Escape-sequence mapping tables.
//!
//! A [`MappingTable`] owns the `sequence -> replacement` pairs together with
//! the candidate order the replacer scans: every sequence exactly once,
//! longest first. Tables are immutable after construction and are meant to
//! be shared behind an `Arc`.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::error::{MappingError, MappingResult};
use crate::unicode;

/// Built-in LaTeX command table: (sequence, replacement).
pub const LATEX_SYMBOLS: &[(&str, &str)] = &[
    // Greek lowercase
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\delta", "δ"),
    ("\\epsilon", "ϵ"),
    ("\\varepsilon", "ε"),
    ("\\zeta", "ζ"),
    ("\\eta", "η"),
    ("\\theta", "θ"),
    ("\\vartheta", "ϑ"),
    ("\\iota", "ι"),
    ("\\kappa", "κ"),
    ("\\lambda", "λ"),
    ("\\mu", "μ"),
    ("\\nu", "ν"),
    ("\\xi", "ξ"),
    ("\\pi", "π"),
    ("\\varpi", "ϖ"),
    ("\\rho", "ρ"),
    ("\\varrho", "ϱ"),
    ("\\sigma", "σ"),
    ("\\varsigma", "ς"),
    ("\\tau", "τ"),
    ("\\upsilon", "υ"),
    ("\\phi", "ϕ"),
    ("\\varphi", "φ"),
    ("\\chi", "χ"),
    ("\\psi", "ψ"),
    ("\\omega", "ω"),
    // Greek uppercase
    ("\\Gamma", "Γ"),
    ("\\Delta", "Δ"),
    ("\\Theta", "Θ"),
    ("\\Lambda", "Λ"),
    ("\\Xi", "Ξ"),
    ("\\Pi", "Π"),
    ("\\Sigma", "Σ"),
    ("\\Upsilon", "Υ"),
    ("\\Phi", "Φ"),
    ("\\Psi", "Ψ"),
    ("\\Omega", "Ω"),
    // Relations
    ("\\leq", "≤"),
    ("\\le", "≤"),
    ("\\geq", "≥"),
    ("\\ge", "≥"),
    ("\\neq", "≠"),
    ("\\ne", "≠"),
    ("\\approx", "≈"),
    ("\\equiv", "≡"),
    ("\\sim", "∼"),
    ("\\simeq", "≃"),
    ("\\cong", "≅"),
    ("\\propto", "∝"),
    ("\\ll", "≪"),
    ("\\gg", "≫"),
    ("\\prec", "≺"),
    ("\\succ", "≻"),
    ("\\perp", "⊥"),
    ("\\parallel", "∥"),
    ("\\mid", "∣"),
    // Operators
    ("\\pm", "±"),
    ("\\mp", "∓"),
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\cdot", "⋅"),
    ("\\circ", "∘"),
    ("\\bullet", "∙"),
    ("\\ast", "∗"),
    ("\\star", "⋆"),
    ("\\oplus", "⊕"),
    ("\\ominus", "⊖"),
    ("\\otimes", "⊗"),
    ("\\odot", "⊙"),
    ("\\wedge", "∧"),
    ("\\vee", "∨"),
    ("\\sum", "∑"),
    ("\\prod", "∏"),
    ("\\coprod", "∐"),
    ("\\int", "∫"),
    ("\\iint", "∬"),
    ("\\iiint", "∭"),
    ("\\oint", "∮"),
    ("\\partial", "∂"),
    ("\\nabla", "∇"),
    ("\\sqrt", "√"),
    ("\\infty", "∞"),
    // Sets and logic
    ("\\in", "∈"),
    ("\\notin", "∉"),
    ("\\ni", "∋"),
    ("\\subset", "⊂"),
    ("\\supset", "⊃"),
    ("\\subseteq", "⊆"),
    ("\\supseteq", "⊇"),
    ("\\cup", "∪"),
    ("\\cap", "∩"),
    ("\\setminus", "∖"),
    ("\\emptyset", "∅"),
    ("\\varnothing", "∅"),
    ("\\forall", "∀"),
    ("\\exists", "∃"),
    ("\\nexists", "∄"),
    ("\\neg", "¬"),
    ("\\lnot", "¬"),
    ("\\land", "∧"),
    ("\\lor", "∨"),
    ("\\top", "⊤"),
    ("\\bot", "⊥"),
    ("\\vdash", "⊢"),
    ("\\models", "⊨"),
    ("\\therefore", "∴"),
    ("\\because", "∵"),
    // Arrows
    ("\\to", "→"),
    ("\\rightarrow", "→"),
    ("\\leftarrow", "←"),
    ("\\gets", "←"),
    ("\\leftrightarrow", "↔"),
    ("\\Rightarrow", "⇒"),
    ("\\Leftarrow", "⇐"),
    ("\\Leftrightarrow", "⇔"),
    ("\\implies", "⟹"),
    ("\\impliedby", "⟸"),
    ("\\iff", "⟺"),
    ("\\mapsto", "↦"),
    ("\\uparrow", "↑"),
    ("\\downarrow", "↓"),
    ("\\updownarrow", "↕"),
    ("\\longrightarrow", "⟶"),
    ("\\longleftarrow", "⟵"),
    ("\\hookrightarrow", "↪"),
    ("\\nearrow", "↗"),
    ("\\searrow", "↘"),
    // Blackboard bold
    ("\\N", "ℕ"),
    ("\\Z", "ℤ"),
    ("\\Q", "ℚ"),
    ("\\R", "ℝ"),
    ("\\C", "ℂ"),
    ("\\mathbb{N}", "ℕ"),
    ("\\mathbb{Z}", "ℤ"),
    ("\\mathbb{Q}", "ℚ"),
    ("\\mathbb{R}", "ℝ"),
    ("\\mathbb{C}", "ℂ"),
    // Misc
    ("\\aleph", "ℵ"),
    ("\\hbar", "ℏ"),
    ("\\ell", "ℓ"),
    ("\\Re", "ℜ"),
    ("\\Im", "ℑ"),
    ("\\wp", "℘"),
    ("\\angle", "∠"),
    ("\\degree", "°"),
    ("\\prime", "′"),
    ("\\dagger", "†"),
    ("\\ldots", "…"),
    ("\\cdots", "⋯"),
    ("\\vdots", "⋮"),
    ("\\ddots", "⋱"),
    ("\\langle", "⟨"),
    ("\\rangle", "⟩"),
    ("\\lceil", "⌈"),
    ("\\rceil", "⌉"),
    ("\\lfloor", "⌊"),
    ("\\rfloor", "⌋"),
    ("\\square", "□"),
    ("\\checkmark", "✓"),
];

/// Immutable `sequence -> replacement` table with its longest-first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    /// Pairs in insertion order
    entries: IndexMap<String, String>,
    /// Every key exactly once, by descending rune length
    ordered: Vec<String>,
}

impl MappingTable {
    /// Build a table from `(sequence, replacement)` pairs.
    ///
    /// The candidate order is derived here: descending rune length, ties in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use latexkit_core::mapping::MappingTable;
    ///
    /// let table = MappingTable::from_pairs([("b", "β"), ("ab", "α")]).unwrap();
    /// let order: Vec<&str> = table.ordered_sequences().collect();
    /// assert_eq!(order, vec!["ab", "b"]);
    /// ```
    pub fn from_pairs<I, S, R>(pairs: I) -> MappingResult<Self>
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (sequence, replacement) in pairs {
            let sequence = sequence.into();
            let replacement = replacement.into();
            validate_pair(&sequence, &replacement)?;
            if entries.contains_key(&sequence) {
                return Err(MappingError::DuplicateSequence { sequence });
            }
            entries.insert(sequence, replacement);
        }
        Ok(Self::from_entries(entries))
    }

    /// Build a table from a mapping and an externally derived candidate order.
    ///
    /// The order must contain every key exactly once and must never place a
    /// shorter sequence before a longer one.
    pub fn from_parts(
        entries: IndexMap<String, String>,
        ordered: Vec<String>,
    ) -> MappingResult<Self> {
        for (sequence, replacement) in &entries {
            validate_pair(sequence, replacement)?;
        }

        let mut seen = HashSet::with_capacity(ordered.len());
        for sequence in &ordered {
            if !entries.contains_key(sequence) {
                return Err(MappingError::UnknownSequence {
                    sequence: sequence.clone(),
                });
            }
            if !seen.insert(sequence.as_str()) {
                return Err(MappingError::DuplicateSequence {
                    sequence: sequence.clone(),
                });
            }
        }

        if let Some(missing) = entries.keys().find(|key| !seen.contains(key.as_str())) {
            return Err(MappingError::MissingFromOrder {
                sequence: missing.clone(),
            });
        }

        for pair in ordered.windows(2) {
            if unicode::rune_count(&pair[0]) < unicode::rune_count(&pair[1]) {
                return Err(MappingError::OrderViolation {
                    shorter: pair[0].clone(),
                    longer: pair[1].clone(),
                });
            }
        }

        Ok(Self { entries, ordered })
    }

    /// The built-in LaTeX command table.
    pub fn latex() -> Self {
        let entries = LATEX_SYMBOLS
            .iter()
            .map(|(sequence, replacement)| (sequence.to_string(), replacement.to_string()))
            .collect();
        Self::from_entries(entries)
    }

    /// Start a builder for layering entries.
    pub fn builder() -> MappingTableBuilder {
        MappingTableBuilder::default()
    }

    fn from_entries(entries: IndexMap<String, String>) -> Self {
        let mut ordered: Vec<String> = entries.keys().cloned().collect();
        // stable sort keeps insertion order among equal lengths
        ordered.sort_by_key(|sequence| std::cmp::Reverse(unicode::rune_count(sequence)));
        Self { entries, ordered }
    }

    /// Replacement for an exact sequence.
    pub fn get(&self, sequence: &str) -> Option<&str> {
        self.entries.get(sequence).map(String::as_str)
    }

    /// Whether `sequence` is an exact key of the table.
    pub fn contains(&self, sequence: &str) -> bool {
        self.entries.contains_key(sequence)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(sequence, replacement)| (sequence.as_str(), replacement.as_str()))
    }

    /// Candidate sequences, longest first.
    pub fn ordered_sequences(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered.iter().map(String::as_str)
    }

    /// Rune length of the longest sequence, 0 for an empty table.
    pub fn longest_sequence_len(&self) -> usize {
        self.ordered
            .first()
            .map(|sequence| unicode::rune_count(sequence))
            .unwrap_or(0)
    }

    /// An owned copy of the pairs in insertion order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.entries.clone()
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::latex()
    }
}

fn validate_pair(sequence: &str, replacement: &str) -> MappingResult<()> {
    if sequence.is_empty() {
        return Err(MappingError::EmptySequence);
    }
    if replacement.is_empty() {
        return Err(MappingError::EmptyReplacement {
            sequence: sequence.to_string(),
        });
    }
    Ok(())
}

/// Accumulates entries, letting later inserts override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct MappingTableBuilder {
    entries: IndexMap<String, String>,
}

impl MappingTableBuilder {
    /// Add or override a single entry.
    pub fn insert(mut self, sequence: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.entries.insert(sequence.into(), replacement.into());
        self
    }

    /// Copy every entry of `table`, overriding existing sequences.
    pub fn extend_from(mut self, table: &MappingTable) -> Self {
        for (sequence, replacement) in table.iter() {
            self.entries
                .insert(sequence.to_string(), replacement.to_string());
        }
        self
    }

    /// Validate the entries and derive the candidate order.
    pub fn build(self) -> MappingResult<MappingTable> {
        for (sequence, replacement) in &self.entries {
            validate_pair(sequence, replacement)?;
        }
        Ok(MappingTable::from_entries(self.entries))
    }
}
