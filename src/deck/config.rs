//! Deck configuration and the YAML deck file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{Error, Result};
use crate::layout::{LayoutGeometry, Palette, Typography};

use super::spec::SlideSpec;

/// Which slides carry the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignaturePolicy {
    None,
    /// The first slide and the last slide.
    #[default]
    FirstAndLast,
    EverySlide,
}

impl SignaturePolicy {
    /// Whether slide `index` of a `count`-slide deck is signed.
    pub fn applies(&self, index: usize, count: usize) -> bool {
        match self {
            SignaturePolicy::None => false,
            SignaturePolicy::FirstAndLast => index == 0 || index + 1 == count,
            SignaturePolicy::EverySlide => index < count,
        }
    }
}

/// How the signature is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStyle {
    /// Organization line over an author line, centered near the bottom.
    #[default]
    Block,
    /// One subtle line in the footer strip.
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    pub policy: SignaturePolicy,
    pub style: SignatureStyle,
    pub organization: String,
    pub author: String,
    /// Appended to the organization line on the cover slide.
    pub cover_suffix: String,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            policy: SignaturePolicy::FirstAndLast,
            style: SignatureStyle::Block,
            organization: "天翼云湖北分公司".to_string(),
            author: "王理".to_string(),
            cover_suffix: " 作者".to_string(),
        }
    }
}

impl SignatureConfig {
    /// First line of the signature block.
    pub fn organization_line(&self, cover: bool) -> String {
        if cover {
            format!("{}{}", self.organization, self.cover_suffix)
        } else {
            self.organization.clone()
        }
    }

    /// Text of the footer-style signature.
    pub fn footer_line(&self, cover: bool) -> String {
        if cover {
            format!("{}{}：{}", self.organization, self.cover_suffix, self.author)
        } else {
            format!("{} {}", self.organization, self.author)
        }
    }
}

/// Everything the deck builder needs besides the slides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub geometry: LayoutGeometry,
    pub typography: Typography,
    pub palette: Palette,
    pub signature: SignatureConfig,
    /// Output path, relative to the deck file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl DeckConfig {
    /// Check the geometry and the typography. Palette values are checked
    /// when they are parsed.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        self.typography.validate()
    }
}

/// A parsed deck file: configuration plus the slide list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckFile {
    #[serde(flatten)]
    pub config: DeckConfig,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
    /// Directory of the deck file; relative paths were resolved against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl DeckFile {
    /// Parse a deck from YAML text. Paths are left as written.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let deck: DeckFile = serde_saphyr::from_str(text)?;
        Ok(deck)
    }

    /// Read a deck file and resolve relative image and output paths against
    /// its directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read deck file {}: {}", path.display(), e))
        })?;
        let mut deck: DeckFile = serde_saphyr::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        deck.resolve_paths(&base);
        debug!(
            path = %path.display(),
            slides = deck.slides.len(),
            "deck file loaded"
        );
        Ok(deck)
    }

    /// Make relative image and output paths relative to `base` instead.
    pub fn resolve_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            if let Some(image) = slide.image.as_mut().filter(|p| p.is_relative()) {
                *image = base.join(&*image);
            }
        }
        if let Some(output) = self.config.output.as_mut().filter(|p| p.is_relative()) {
            *output = base.join(&*output);
        }
        self.base_dir = Some(base.to_path_buf());
    }

    pub fn into_parts(self) -> (DeckConfig, Vec<SlideSpec>) {
        (self.config, self.slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Length, RGBColor};
    use crate::layout::{CanvasPreset, LayoutKind};

    const DECK: &str = "\
title: The Architecture of Memory
author: Wang Li
output: Memory_Architecture.pptx
geometry: { canvas: 4x3 }
palette: { emphasis: \"#2ECC71\" }
signature: { policy: every_slide, style: footer }
slides:
  - layout: title
    title: \"内存的战争\"
    body_lines: [\"NVIDIA Rubin vs. DeepSeek Engram\"]
    image: img/cover.png
  - layout: big_number
    title: HBM4
    body_lines: [\"## 22 TB/s\", \"Memory Bandwidth\"]
";

    #[test]
    fn test_policy_placement() {
        let policy = SignaturePolicy::FirstAndLast;
        let signed: Vec<usize> = (0..5).filter(|&i| policy.applies(i, 5)).collect();
        assert_eq!(signed, vec![0, 4]);
        assert!(policy.applies(0, 1));

        assert!(!SignaturePolicy::None.applies(0, 3));
        assert!((0..3).all(|i| SignaturePolicy::EverySlide.applies(i, 3)));
    }

    #[test]
    fn test_signature_lines() {
        let signature = SignatureConfig::default();
        assert_eq!(signature.organization_line(false), "天翼云湖北分公司");
        assert_eq!(signature.organization_line(true), "天翼云湖北分公司 作者");
        assert_eq!(signature.footer_line(true), "天翼云湖北分公司 作者：王理");
        assert_eq!(signature.footer_line(false), "天翼云湖北分公司 王理");
    }

    #[test]
    fn test_parse_deck() {
        let deck = DeckFile::from_yaml_str(DECK).unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].layout, LayoutKind::Title);
        assert_eq!(deck.config.title.as_deref(), Some("The Architecture of Memory"));
        assert_eq!(deck.config.geometry.canvas, CanvasPreset::Standard.canvas());
        assert_eq!(deck.config.geometry.margin, Length::from_inches(0.5));
        assert_eq!(deck.config.palette.emphasis, RGBColor::EMERALD);
        assert_eq!(deck.config.palette.title, RGBColor::WHITE);
        assert_eq!(deck.config.signature.policy, SignaturePolicy::EverySlide);
        assert_eq!(deck.config.signature.style, SignatureStyle::Footer);
        assert_eq!(deck.config.signature.author, "王理");
    }

    #[test]
    fn test_empty_deck_uses_defaults() {
        let deck = DeckFile::from_yaml_str("slides: []\n").unwrap();
        assert_eq!(deck.config, DeckConfig::default());
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_font_size() {
        let deck = DeckFile::from_yaml_str("typography: { body_size: 0 }\nslides: []\n").unwrap();
        let err = deck.config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{}", err);

        let deck =
            DeckFile::from_yaml_str("typography: { footer_size: -2 }\nslides: []\n").unwrap();
        assert!(deck.config.validate().is_err());
        DeckConfig::default().validate().unwrap();
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = DeckFile::from_yaml_str("palette: { emphasis: gold }\nslides: []\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(&path, DECK).unwrap();

        let deck = DeckFile::load(&path).unwrap();
        assert_eq!(
            deck.slides[0].image.as_deref(),
            Some(dir.path().join("img/cover.png").as_path())
        );
        assert_eq!(
            deck.config.output.as_deref(),
            Some(dir.path().join("Memory_Architecture.pptx").as_path())
        );
        assert_eq!(deck.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DeckFile::load("/nonexistent/deck.yaml").unwrap_err();
        assert!(err.to_string().contains("deck.yaml"));
    }
}
