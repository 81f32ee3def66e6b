//! Plain-text output.

use bazi_calendar::{LunarDate, LunarMonth};
use bazi_core::{BaziChart, CorrectedTime, PillarDetail, RelationKind};
use bazi_tables::{ALL_ELEMENTS, SexagenaryPair, nayin_of};
use serde::Serialize;

pub fn chart(chart: &BaziChart) {
    println!("          Year    Month   Day     Hour");
    row(chart, "Stem", |p| p.stem_label.chinese.clone());
    row(chart, "Branch", |p| p.branch_label.chinese.clone());
    row(chart, "Element", |p| p.element_label.chinese.clone());
    row(chart, "Ten God", |p| {
        p.ten_god.map_or_else(|| "日主".to_owned(), |g| g.chinese().to_owned())
    });
    row(chart, "Hidden", |p| p.hidden_stems.iter().map(|h| h.stem_chinese.as_str()).collect());
    row(chart, "Na Yin", |p| p.nayin.label.chinese.clone());
    println!();

    for p in chart.pillars.iter() {
        if !p.spirits.is_empty() {
            let names: Vec<&str> = p.spirits.iter().map(|s| s.label.chinese.as_str()).collect();
            println!("{} spirits: {}", p.role.name(), names.join(" "));
        }
    }

    let tally: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|e| format!("{}{}", e.chinese(), chart.element_tally.get(*e)))
        .collect();
    println!("Elements: {}", tally.join(" "));
    println!(
        "Day Master: {} ({})  lucky {}  unlucky {}",
        chart.day_master.chinese(),
        chart.day_master.name(),
        chart.lucky_element.chinese(),
        chart.unlucky_element.chinese(),
    );
    println!(
        "Zodiac: {} ({})  void: {}{}",
        chart.zodiac.animal_chinese,
        chart.zodiac.animal,
        chart.void_branches[0].chinese(),
        chart.void_branches[1].chinese(),
    );
    solar_time(&chart.solar_time);
    println!("Lunar date: {}", chart.lunar_date);

    for r in &chart.relations {
        let kind = match r.kind {
            RelationKind::StemCombination => "stem combination",
            RelationKind::BranchHarmony => "branch harmony",
            RelationKind::BranchClash => "branch clash",
        };
        let element = r.element.map(|e| format!(" -> {}", e.chinese())).unwrap_or_default();
        println!("{kind}: {} / {}{element}", r.between[0].name(), r.between[1].name());
    }
    println!("Source: {:?}", chart.source);
}

fn row(chart: &BaziChart, label: &str, cell: impl Fn(&PillarDetail) -> String) {
    let cells: Vec<String> = chart.pillars.iter().map(|p| format!("{:<8}", cell(p))).collect();
    println!("{label:<10}{}", cells.concat().trim_end());
}

pub fn solar_time(t: &CorrectedTime) {
    let shift = match t.day_shift {
        0 => "",
        d if d > 0 => " (next day, wrapped)",
        _ => " (previous day, wrapped)",
    };
    println!(
        "Solar time: {:02}:{:02}{shift}  offset {:+.1} min",
        t.hour, t.minute, t.offset_minutes
    );
}

pub fn lunar(date: &LunarDate, months: Option<&[LunarMonth]>) {
    println!("Lunar date: {date}");
    if let Some(months) = months {
        for m in months {
            let leap = if m.is_leap_month { "leap " } else { "" };
            println!(
                "  {leap}month {:>2}  starts {}  {} days",
                m.month, m.start, m.length_days
            );
        }
    }
}

/// One row of the sixty-pair cycle.
#[derive(Debug, Serialize)]
pub struct CycleEntry {
    pub index: u8,
    pub chinese: String,
    pub pinyin: String,
    pub nayin: &'static str,
    pub nayin_pinyin: &'static str,
    pub void_branches: String,
}

impl From<SexagenaryPair> for CycleEntry {
    fn from(pair: SexagenaryPair) -> Self {
        let n = nayin_of(pair);
        let [a, b] = pair.void_branches();
        Self {
            index: pair.cycle_index(),
            chinese: pair.chinese(),
            pinyin: pair.name(),
            nayin: n.chinese,
            nayin_pinyin: n.pinyin,
            void_branches: format!("{}{}", a.chinese(), b.chinese()),
        }
    }
}

pub fn cycle(entries: &[CycleEntry]) {
    for e in entries {
        println!(
            "{:>2}  {}  {:<10} {}  {:<22} void {}",
            e.index, e.chinese, e.pinyin, e.nayin, e.nayin_pinyin, e.void_branches
        );
    }
}
