use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use petal_core::{HexColor, PetalError};

/// Root configuration — maps to `petal.toml`.
///
/// The document is read once at build time. `content` tells the class scanner
/// which files to inspect; `theme` layers extra design tokens on top of the
/// base theme; `plugins` lists generator extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetalConfig {
    /// Glob patterns for the files scanned for utility-class references.
    /// Order is preserved verbatim; matching is a union across patterns.
    pub content: Vec<String>,
    /// Generator plugins to load, in order. Empty by default.
    pub plugins: Vec<PluginRef>,
    pub theme: ThemeConfig,
}

// ── Theme ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Tokens added on top of the base theme. Additive: base tokens survive
    /// unless an extension re-declares the same name.
    pub extend: ThemeExtend,
}

/// Design tokens layered on the base theme, grouped by category.
///
/// Colors are the typed category; any other category (spacing, fonts, ...)
/// is carried verbatim as token → value strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeExtend {
    /// Named colors, values as `#RRGGBB` literals.
    pub colors: BTreeMap<String, String>,
    /// Other design-token categories.
    #[serde(flatten)]
    pub categories: BTreeMap<String, BTreeMap<String, String>>,
}

pub const COLORS_CATEGORY: &str = "colors";

impl ThemeExtend {
    /// Look up an extension color. Answers only for tokens declared here —
    /// never falls back to the base theme.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Checked color lookup: the token must exist and parse as `#RRGGBB`.
    pub fn require_color(&self, name: &str) -> petal_core::Result<HexColor> {
        let value = self.color(name).ok_or_else(|| PetalError::UnknownToken {
            category: COLORS_CATEGORY.into(),
            name: name.into(),
        })?;
        value.parse()
    }

    /// Add a color token. The value must be a well-formed `#RRGGBB` literal
    /// and the name must not already be taken — duplicates are rejected, not
    /// overwritten.
    pub fn add_color(&mut self, name: &str, value: &str) -> petal_core::Result<()> {
        value.parse::<HexColor>()?;
        if self.colors.contains_key(name) {
            return Err(PetalError::DuplicateTokenName {
                category: COLORS_CATEGORY.into(),
                name: name.into(),
            });
        }
        self.colors.insert(name.into(), value.into());
        Ok(())
    }

    /// Tokens of one category, `"colors"` included.
    pub fn category(&self, category: &str) -> Option<&BTreeMap<String, String>> {
        if category == COLORS_CATEGORY {
            Some(&self.colors)
        } else {
            self.categories.get(category)
        }
    }

    /// Look up a token in any category.
    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.category(category)?.get(name).map(String::as_str)
    }

    /// Checked token lookup.
    pub fn require_token(&self, category: &str, name: &str) -> petal_core::Result<&str> {
        self.token(category, name).ok_or_else(|| PetalError::UnknownToken {
            category: category.into(),
            name: name.into(),
        })
    }

    /// Add a token to a category, creating the category if needed.
    /// Color values go through `add_color` and get the hex check.
    pub fn add_token(&mut self, category: &str, name: &str, value: &str) -> petal_core::Result<()> {
        if category == COLORS_CATEGORY {
            return self.add_color(name, value);
        }
        let tokens = self.categories.entry(category.into()).or_default();
        if tokens.contains_key(name) {
            return Err(PetalError::DuplicateTokenName {
                category: category.into(),
                name: name.into(),
            });
        }
        tokens.insert(name.into(), value.into());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.categories.values().all(BTreeMap::is_empty)
    }
}

impl ThemeConfig {
    /// Overlay the extension tokens for `category` onto a base palette.
    /// Base entries survive; an extension that re-declares a base name wins.
    pub fn resolve(
        &self,
        category: &str,
        base: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let mut resolved = base.clone();
        if let Some(tokens) = self.extend.category(category) {
            for (name, value) in tokens {
                resolved.insert(name.clone(), value.clone());
            }
        }
        resolved
    }
}

// ── Plugins ────────────────────────────────────────────────────

/// Reference to a generator plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginRef {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ── Content globs ──────────────────────────────────────────────

impl PetalConfig {
    /// The configured glob patterns, verbatim. No filesystem access.
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    /// Compile every content pattern with the scanner's glob engine.
    pub fn compiled_globs(&self) -> petal_core::Result<Vec<glob::Pattern>> {
        self.content
            .iter()
            .map(|p| {
                check_glob_syntax(p).map_err(|reason| PetalError::InvalidGlobPattern {
                    pattern: p.clone(),
                    reason,
                })
            })
            .collect()
    }
}

/// Compile one pattern, rejecting forms the scanner cannot take.
fn check_glob_syntax(pattern: &str) -> Result<glob::Pattern, String> {
    if pattern.is_empty() {
        return Err("pattern is empty".into());
    }
    if pattern.contains('\\') {
        return Err("backslash path separator".into());
    }
    glob::Pattern::new(pattern).map_err(|e| e.to_string())
}

fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl PetalConfig {
    /// Validate the document and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    ///
    /// A plain load does not run this — malformed values survive
    /// `toml::from_str` untouched. The loader runs it and fails on errors.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Content globs ───
        if self.content.is_empty() {
            warnings.push(ConfigWarning {
                field: "content".into(),
                message: "no content globs configured — the scanner will find no class names"
                    .into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. [\"./templates/**/*.html\"]".into()),
            });
        }
        for (i, pattern) in self.content.iter().enumerate() {
            if let Err(reason) = check_glob_syntax(pattern) {
                warnings.push(ConfigWarning {
                    field: format!("content[{}]", i),
                    message: format!("invalid glob pattern '{}': {}", pattern, reason),
                    severity: WarningSeverity::Error,
                    hint: Some("Use forward slashes and */** wildcards".into()),
                });
            }
        }

        // ── Colors ───
        for (name, value) in &self.theme.extend.colors {
            if !HexColor::is_valid(value) {
                warnings.push(ConfigWarning {
                    field: format!("theme.extend.colors.{}", name),
                    message: format!("value '{}' is not a #RRGGBB color", value),
                    severity: WarningSeverity::Error,
                    hint: Some("Use a 6-digit hex literal like \"#fff1f0\"".into()),
                });
            }
        }
        validate_token_names(COLORS_CATEGORY, self.theme.extend.colors.keys(), &mut warnings);

        // ── Other categories ───
        for (category, tokens) in &self.theme.extend.categories {
            for (name, value) in tokens {
                if value.is_empty() {
                    warnings.push(ConfigWarning {
                        field: format!("theme.extend.{}.{}", category, name),
                        message: "token value is empty".into(),
                        severity: WarningSeverity::Warning,
                        hint: None,
                    });
                }
            }
            validate_token_names(category, tokens.keys(), &mut warnings);
        }

        // ── Plugins ───
        for (i, plugin) in self.plugins.iter().enumerate() {
            if plugin.name.is_empty() {
                warnings.push(ConfigWarning {
                    field: format!("plugins[{}].name", i),
                    message: "plugin name is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: None,
                });
            }
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}

/// Token names must be kebab-case (warning) and pairwise distinct after
/// ASCII-lowercase normalization (error). A literally duplicated key never
/// reaches this point — the TOML parser rejects it — but "Card-Pink" next to
/// "card-pink" does.
fn validate_token_names<'a>(
    category: &str,
    names: impl Iterator<Item = &'a String>,
    warnings: &mut Vec<ConfigWarning>,
) {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for name in names {
        if !is_kebab_case(name) {
            warnings.push(ConfigWarning {
                field: format!("theme.extend.{}.{}", category, name),
                message: "token name is not kebab-case".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Use lowercase letters, digits, and single dashes".into()),
            });
        }
        let normalized = name.to_ascii_lowercase();
        if let Some(first) = seen.get(&normalized) {
            warnings.push(ConfigWarning {
                field: format!("theme.extend.{}.{}", category, name),
                message: format!("duplicate token name: collides with '{}'", first),
                severity: WarningSeverity::Error,
                hint: Some("Token names are unique within a category".into()),
            });
        } else {
            seen.insert(normalized, name);
        }
    }
}
