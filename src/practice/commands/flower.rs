use crate::commands::{CmdMessage, CmdResult, FlowerView};
use crate::error::Result;
use crate::flower::{Flower, FlowerBase, TagDecorator, Threshold};

/// The flower form. A `Some` care field means its checkbox is ticked; the text
/// is parsed with [`Threshold::parse`], so bad numbers become `0`.
#[derive(Debug, Clone, Default)]
pub struct FlowerForm {
    pub name: String,
    pub description: String,
    pub region: String,
    pub ph: Option<String>,
    pub temperature: Option<String>,
    pub season: Option<String>,
}

/// Builds the decorator chain in form order: base, pH, temperature, season.
pub fn build(form: &FlowerForm) -> Box<dyn Flower> {
    let mut flower: Box<dyn Flower> = Box::new(FlowerBase::new(
        form.name.as_str(),
        form.description.as_str(),
        form.region.as_str(),
    ));
    if let Some(ph) = &form.ph {
        flower = Box::new(TagDecorator::ph(flower, Threshold::parse(ph)));
    }
    if let Some(temperature) = &form.temperature {
        flower = Box::new(TagDecorator::temperature(
            flower,
            Threshold::parse(temperature),
        ));
    }
    if let Some(season) = &form.season {
        flower = Box::new(TagDecorator::season(flower, Threshold::parse(season)));
    }
    flower
}

pub fn run(form: &FlowerForm) -> Result<CmdResult> {
    let flower = build(form);
    let mut result = CmdResult::default();

    let tags = [&form.ph, &form.temperature, &form.season]
        .iter()
        .filter(|t| t.is_some())
        .count();
    if tags == 0 {
        result.add_message(CmdMessage::info("No care tags selected"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Applied {} care tag(s)",
            tags
        )));
    }

    Ok(result.with_flower(FlowerView {
        name: flower.name().to_string(),
        region: flower.region().to_string(),
        description: flower.description(),
    }))
}
