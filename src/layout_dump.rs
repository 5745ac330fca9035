use crate::countdown::Countdown;
use crate::layout::{CategorySummary, TimelineLayout};
use crate::theme::CategoryStyle;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub axis: AxisDump,
    pub markers: Vec<MarkerDump>,
    pub excluded: Vec<String>,
    pub week_markers: Vec<WeekMarkerDump>,
    pub summary: CategorySummary,
    pub legend: Vec<LegendDump>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<Countdown>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisDump {
    pub start: String,
    pub end: String,
    pub total_days: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDump {
    pub id: String,
    pub category: String,
    pub event_date: String,
    pub days_from_start: i64,
    pub position: f32,
    pub stack_level: u32,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekMarkerDump {
    pub date: String,
    pub position: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendDump {
    pub category: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

impl LayoutDump {
    pub fn from_layout(layout: &TimelineLayout) -> Self {
        let markers = layout
            .markers
            .iter()
            .map(|marker| {
                let style = CategoryStyle::for_category(&marker.category);
                MarkerDump {
                    id: marker.id.clone(),
                    category: marker.category.to_string(),
                    event_date: marker.event_date.format("%Y-%m-%d").to_string(),
                    days_from_start: marker.days_from_start,
                    position: marker.position,
                    stack_level: marker.stack_level,
                    icon: style.icon,
                    color: style.fill,
                }
            })
            .collect();

        let week_markers = layout
            .week_markers
            .iter()
            .map(|marker| WeekMarkerDump {
                date: marker.date.format("%Y-%m-%d").to_string(),
                position: marker.position,
            })
            .collect();

        let legend = CategoryStyle::legend()
            .into_iter()
            .map(|(category, style)| LegendDump {
                category: category.to_string(),
                icon: style.icon,
                color: style.fill,
                label: style.label,
            })
            .collect();

        LayoutDump {
            axis: AxisDump {
                start: layout.axis.start.format("%Y-%m-%d").to_string(),
                end: layout.axis.end.format("%Y-%m-%d").to_string(),
                total_days: layout.axis.total_days,
            },
            markers,
            excluded: layout.excluded.clone(),
            week_markers,
            summary: layout.summary,
            legend,
            countdown: layout.countdown,
        }
    }
}

pub fn write_layout_dump(path: Option<&Path>, layout: &TimelineLayout) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout);
    match path {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &dump)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
