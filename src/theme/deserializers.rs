use gpui::{AbsoluteLength, FontWeight, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(entry) => Ok(SmallVec::from_buf([entry])),
        OneOrMany::Many(entries) if entries.is_empty() => {
            Err(D::Error::custom("expected at least one entry"))
        }
        OneOrMany::Many(entries) => Ok(entries),
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(value) => Ok(px(value)),
        StringOrFloat::String(string) => string
            .strip_suffix("px")
            .and_then(|value| value.parse::<f32>().ok())
            .map(px)
            .ok_or_else(|| {
                D::Error::custom(format!("expected a pixel value like \"16px\", got {string:?}"))
            }),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    fn parse(string: &str) -> Option<AbsoluteLength> {
        if let Some(value) = string.strip_suffix("rem") {
            return value
                .parse()
                .ok()
                .map(|value| AbsoluteLength::Rems(rems(value)));
        }

        string
            .strip_suffix("px")
            .and_then(|value| value.parse().ok())
            .map(|value| AbsoluteLength::Pixels(px(value)))
    }

    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(value) => Ok(AbsoluteLength::Pixels(px(value))),
        StringOrFloat::String(string) => parse(&string).ok_or_else(|| {
            D::Error::custom(format!(
                "expected a length like \"1.5rem\" or \"24px\", got {string:?}"
            ))
        }),
    }
}

pub fn de_font_weight<'de, D>(deserializer: D) -> Result<FontWeight, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = f32::deserialize(deserializer)?;

    if !(100.0..=950.0).contains(&weight) {
        return Err(D::Error::custom("font weight must be between 100 and 950"));
    }

    Ok(FontWeight(weight))
}
