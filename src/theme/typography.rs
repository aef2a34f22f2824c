use enum_assoc::Assoc;
use gpui::{AbsoluteLength, DefiniteLength, FontWeight, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_font_weight, de_string_or_non_empty_list};

/// The theme's typography table: one shared font stack plus a resolved style
/// record for every named text style.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeTypography {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    pub styles: ThemeTextStyles,
}

/// A single resolved text style.
///
/// The line height is never stored; it is always derived from the font size
/// and the style's leading category, so the two can't drift apart.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeTextStyle {
    #[serde(deserialize_with = "de_abs_length")]
    pub size: AbsoluteLength,
    #[serde(deserialize_with = "de_font_weight")]
    pub weight: FontWeight,
    pub leading: LeadingKind,
}

impl ThemeTextStyle {
    /// Line height as a fraction of the font size.
    pub fn line_height(&self) -> DefiniteLength {
        DefiniteLength::Fraction(self.leading.multiplier())
    }
}

/// Leading categories with fixed line-height multipliers.
#[derive(Assoc, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[func(pub fn multiplier(&self) -> f32)]
pub enum LeadingKind {
    #[assoc(multiplier = 1.2)]
    Tight,
    #[assoc(multiplier = 1.5)]
    Normal,
    #[assoc(multiplier = 1.8)]
    Relaxed,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeTextStyles {
    pub h1: ThemeTextStyle,
    pub h1_regular: ThemeTextStyle,
    pub h2: ThemeTextStyle,
    pub h3: ThemeTextStyle,
    pub h3_regular: ThemeTextStyle,
    pub h4: ThemeTextStyle,
    pub h5: ThemeTextStyle,
    pub body: ThemeTextStyle,
    pub label: ThemeTextStyle,
    pub label_bold: ThemeTextStyle,
    pub label_regular: ThemeTextStyle,
    pub label_regular2: ThemeTextStyle,
    pub label_regular3: ThemeTextStyle,
    pub quote: ThemeTextStyle,
    pub quote_bold: ThemeTextStyle,
    pub small: ThemeTextStyle,
    pub button_label_bold: ThemeTextStyle,
    pub button_label_semi_bold: ThemeTextStyle,
    pub extra_small: ThemeTextStyle,
    pub extra_small_semi_bold: ThemeTextStyle,
    pub extra_small10: ThemeTextStyle,
}

/// Named text styles exposed to components.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    H1,
    H1Regular,
    H2,
    H3,
    H3Regular,
    H4,
    H5,
    #[default]
    Body,
    Label,
    LabelBold,
    LabelRegular,
    LabelRegular2,
    LabelRegular3,
    Quote,
    QuoteBold,
    Small,
    ButtonLabelBold,
    ButtonLabelSemiBold,
    ExtraSmall,
    ExtraSmallSemiBold,
    ExtraSmall10,
}

impl TextVariant {
    pub fn resolve<'a>(&self, typography: &'a ThemeTypography) -> &'a ThemeTextStyle {
        let styles = &typography.styles;

        match self {
            TextVariant::H1 => &styles.h1,
            TextVariant::H1Regular => &styles.h1_regular,
            TextVariant::H2 => &styles.h2,
            TextVariant::H3 => &styles.h3,
            TextVariant::H3Regular => &styles.h3_regular,
            TextVariant::H4 => &styles.h4,
            TextVariant::H5 => &styles.h5,
            TextVariant::Body => &styles.body,
            TextVariant::Label => &styles.label,
            TextVariant::LabelBold => &styles.label_bold,
            TextVariant::LabelRegular => &styles.label_regular,
            TextVariant::LabelRegular2 => &styles.label_regular2,
            TextVariant::LabelRegular3 => &styles.label_regular3,
            TextVariant::Quote => &styles.quote,
            TextVariant::QuoteBold => &styles.quote_bold,
            TextVariant::Small => &styles.small,
            TextVariant::ButtonLabelBold => &styles.button_label_bold,
            TextVariant::ButtonLabelSemiBold => &styles.button_label_semi_bold,
            TextVariant::ExtraSmall => &styles.extra_small,
            TextVariant::ExtraSmallSemiBold => &styles.extra_small_semi_bold,
            TextVariant::ExtraSmall10 => &styles.extra_small10,
        }
    }
}
