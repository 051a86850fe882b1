use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nutri_cli::types::AnalysisResult;
use nutri_model::{BmiCategory, EnrichedRecord, MuacCategory, ThresholdConfig};
use nutri_report::{CategoryShare, category_shares, format_mean, format_pct};

pub fn print_analysis(result: &AnalysisResult, risk_only: bool) {
    println!("Source: {}", result.source.display());
    println!("Profile: {}", result.profile);
    if let Some(path) = &result.outputs.enriched_csv {
        println!("Enriched table: {}", path.display());
    }
    if let Some(path) = &result.outputs.summary_json {
        println!("Summary: {}", path.display());
    }
    if !risk_only {
        print_record_table("Records:", &result.records);
    }
    print_summary_table(result);
    if !risk_only {
        print_distribution(
            "BMI distribution:",
            &category_shares(&result.summary.bmi_counts, result.summary.total),
        );
        print_distribution(
            "MUAC distribution:",
            &category_shares(&result.summary.muac_counts, result.summary.total),
        );
    }
    if result.summary.high_risk.is_empty() {
        println!();
        println!(
            "High risk (BMI < {} and MUAC < {}): none",
            result.thresholds.risk.bmi_below, result.thresholds.risk.muac_below
        );
    } else {
        print_record_table(
            &format!(
                "High risk (BMI < {} and MUAC < {}):",
                result.thresholds.risk.bmi_below, result.thresholds.risk.muac_below
            ),
            &result.summary.high_risk,
        );
    }
    if !result.rejected.is_empty() {
        eprintln!();
        eprintln!("Rejected rows:");
        for issue in &result.rejected {
            eprintln!("- {}: {}", issue.identifier, issue.message);
        }
    }
}

fn print_record_table(title: &str, records: &[EnrichedRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Gender"),
        header_cell("Age"),
        header_cell("Weight (kg)"),
        header_cell("Height (cm)"),
        header_cell("BMI"),
        header_cell("BMI Category"),
        header_cell("MUAC (cm)"),
        header_cell("MUAC Category"),
        header_cell("Growth"),
    ]);
    apply_record_table_style(&mut table);
    for index in [2, 3, 4, 5, 7, 9] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        let source = &record.record;
        table.add_row(vec![
            Cell::new(source.identifier.to_string()).add_attribute(Attribute::Bold),
            Cell::new(&source.gender),
            Cell::new(source.age),
            Cell::new(source.weight_kg),
            Cell::new(source.height_cm),
            Cell::new(format!("{:.2}", record.bmi)),
            bmi_category_cell(record.bmi_category),
            Cell::new(source.muac_cm),
            muac_category_cell(record.muac_category),
            Cell::new(format!("{:.2}", record.growth_efficiency)),
        ]);
    }
    println!();
    println!("{title}");
    println!("{table}");
}

fn print_summary_table(result: &AnalysisResult) {
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records"), Cell::new(summary.total)]);
    table.add_row(vec![
        Cell::new("Rejected rows"),
        count_cell(result.rejected.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Average BMI"),
        value_cell(format_mean(summary.mean_bmi)),
    ]);
    table.add_row(vec![
        Cell::new("Average MUAC (cm)"),
        value_cell(format_mean(summary.mean_muac)),
    ]);
    table.add_row(vec![
        Cell::new("Average growth efficiency"),
        value_cell(format_mean(summary.mean_growth_efficiency)),
    ]);
    table.add_row(vec![
        Cell::new("Underweight"),
        value_cell(format_pct(summary.underweight_pct)),
    ]);
    table.add_row(vec![
        Cell::new("High risk"),
        count_cell(summary.high_risk.len(), Color::Red),
    ]);
    for (gender, count) in &summary.gender_counts {
        table.add_row(vec![
            dim_cell(format!("Gender {gender}")),
            Cell::new(count),
        ]);
    }
    println!();
    println!("Summary:");
    println!("{table}");
}

fn print_distribution(title: &str, shares: &[CategoryShare]) {
    if shares.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in shares {
        table.add_row(vec![
            Cell::new(&share.label),
            Cell::new(share.count),
            Cell::new(format_pct(Some(share.pct))),
        ]);
    }
    println!();
    println!("{title}");
    println!("{table}");
}

pub fn print_thresholds(config: &ThresholdConfig) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scale"),
        header_cell("Category"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);

    let bmi = &config.bmi;
    let bmi_rows = [
        (BmiCategory::SeverelyUnderweight, format!("< {}", bmi.underweight_from)),
        (
            BmiCategory::Underweight,
            format!("{} to < {}", bmi.underweight_from, bmi.normal_from),
        ),
        (
            BmiCategory::Normal,
            format!("{} to < {}", bmi.normal_from, bmi.overweight_from),
        ),
        (
            BmiCategory::Overweight,
            format!("{} to < {}", bmi.overweight_from, bmi.obese_from),
        ),
        (BmiCategory::Obese, format!(">= {}", bmi.obese_from)),
    ];
    for (category, range) in bmi_rows {
        table.add_row(vec![
            Cell::new("BMI"),
            bmi_category_cell(category),
            Cell::new(range),
        ]);
    }

    let muac = &config.muac;
    let child_scale = format!("MUAC (age < {})", muac.child_age_below);
    let scale = format!("MUAC (age >= {})", muac.child_age_below);
    let muac_rows = [
        (
            &child_scale,
            MuacCategory::SevereAcuteMalnutrition,
            format!("< {}", muac.child_moderate_from),
        ),
        (
            &child_scale,
            MuacCategory::ModerateAcuteMalnutrition,
            format!("{} to < {}", muac.child_moderate_from, muac.child_normal_from),
        ),
        (
            &child_scale,
            MuacCategory::Normal,
            format!(">= {}", muac.child_normal_from),
        ),
        (&scale, MuacCategory::Low, format!("< {}", muac.normal_from)),
        (
            &scale,
            MuacCategory::Normal,
            format!("{} to < {}", muac.normal_from, muac.high_from),
        ),
        (&scale, MuacCategory::High, format!(">= {}", muac.high_from)),
    ];
    for (scale, category, range) in muac_rows {
        table.add_row(vec![
            Cell::new(scale),
            muac_category_cell(category),
            Cell::new(range),
        ]);
    }
    println!("{table}");

    println!(
        "Growth efficiency reference: BMI {}, MUAC {} cm",
        config.reference.ideal_bmi, config.reference.ideal_muac
    );
    println!(
        "High risk: BMI < {} and MUAC < {} cm",
        config.risk.bmi_below, config.risk.muac_below
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_record_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn bmi_category_cell(category: BmiCategory) -> Cell {
    let color = match category {
        BmiCategory::SeverelyUnderweight => Color::Red,
        BmiCategory::Underweight | BmiCategory::Overweight => Color::Yellow,
        BmiCategory::Normal => Color::Green,
        BmiCategory::Obese => Color::Magenta,
    };
    let cell = Cell::new(category).fg(color);
    if category == BmiCategory::SeverelyUnderweight {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn muac_category_cell(category: MuacCategory) -> Cell {
    let color = match category {
        MuacCategory::SevereAcuteMalnutrition => Color::Red,
        MuacCategory::ModerateAcuteMalnutrition | MuacCategory::Low => Color::Yellow,
        MuacCategory::Normal => Color::Green,
        MuacCategory::High => Color::Blue,
    };
    let cell = Cell::new(category).fg(color);
    if category == MuacCategory::SevereAcuteMalnutrition {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: String) -> Cell {
    if value == "n/a" {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
