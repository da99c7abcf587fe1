//! Terminal tables describing a USDM document.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use usdm_model::{Study, StudyVersion, Wrapper};

pub fn print_summary(wrapper: &Wrapper) {
    println!("{}", overview_table(wrapper));
    for version in &wrapper.study.versions {
        println!();
        println!("Version {}", version.version_identifier);
        println!("{}", titles_table(version));
        println!("{}", identifiers_table(version));
        if !version.amendments.is_empty() {
            println!("{}", amendments_table(version));
        }
    }
    if !wrapper.study.documented_by.is_empty() {
        println!();
        println!("{}", documents_table(&wrapper.study));
    }
}

pub fn overview_table(wrapper: &Wrapper) -> Table {
    let study = &wrapper.study;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    table.add_row(vec![Cell::new("Study"), Cell::new(&study.name)]);
    table.add_row(vec![Cell::new("Id"), optional_cell(study.id.as_deref())]);
    table.add_row(vec![
        Cell::new("USDM version"),
        Cell::new(&wrapper.usdm_version),
    ]);
    let system = match (&wrapper.system_name, &wrapper.system_version) {
        (Some(name), Some(version)) => Some(format!("{name} {version}")),
        (Some(name), None) => Some(name.clone()),
        _ => None,
    };
    table.add_row(vec![Cell::new("System"), optional_cell(system.as_deref())]);
    table.add_row(vec![Cell::new("Versions"), Cell::new(study.versions.len())]);
    table.add_row(vec![
        Cell::new("Documents"),
        Cell::new(study.documented_by.len()),
    ]);
    table
}

pub fn titles_table(version: &StudyVersion) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Title type"), header_cell("Text")]);
    for title in &version.titles {
        table.add_row(vec![
            Cell::new(&title.title_type.decode),
            Cell::new(&title.text),
        ]);
    }
    table
}

/// Identifiers with their issuing organization resolved through `scopeId`.
pub fn identifiers_table(version: &StudyVersion) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Identifier"),
        header_cell("Organization"),
        header_cell("Organization type"),
    ]);
    for identifier in &version.study_identifiers {
        match version.identifier_scope(identifier) {
            Some(org) => table.add_row(vec![
                Cell::new(&identifier.text),
                Cell::new(&org.name),
                Cell::new(&org.organization_type.decode),
            ]),
            None => table.add_row(vec![
                Cell::new(&identifier.text),
                Cell::new(format!("unresolved {}", identifier.scope_id)).fg(Color::Red),
                dim_cell("-"),
            ]),
        };
    }
    table
}

pub fn amendments_table(version: &StudyVersion) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Amendment"),
        header_cell("Summary"),
        header_cell("Substantial"),
        header_cell("Reasons"),
        header_cell("Enrollment"),
    ]);
    for amendment in &version.amendments {
        let reasons = amendment
            .reasons()
            .map(|reason| match &reason.other_reason {
                Some(other) => format!("{} ({other})", reason.code.decode),
                None => reason.code.decode.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        table.add_row(vec![
            Cell::new(&amendment.number),
            Cell::new(&amendment.summary),
            Cell::new(if amendment.substantial_impact { "Yes" } else { "No" }),
            Cell::new(reasons),
            Cell::new(amendment.total_enrollment()),
        ]);
    }
    table
}

/// Documents and their versions, marking versions a study version points to.
pub fn documents_table(study: &Study) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Type"),
        header_cell("Version"),
        header_cell("Status"),
        header_cell("Referenced"),
    ]);
    for document in &study.documented_by {
        for version in &document.versions {
            let referenced = study
                .versions
                .iter()
                .any(|sv| sv.document_version_id.as_deref() == Some(version.id.as_str()));
            table.add_row(vec![
                Cell::new(&document.name),
                Cell::new(&document.document_type.decode),
                Cell::new(&version.version),
                Cell::new(&version.status.decode),
                if referenced {
                    Cell::new("Yes").fg(Color::Green)
                } else {
                    dim_cell("No")
                },
            ]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
