use scraper::{ElementRef, Html, Selector};
use crate::error::PbpError;
use crate::query_selectors::BoxscoreSelectors;

pub struct TableSelectors {
    pub pbp_wrapper: Selector,
    pub pbp_table: Selector,
    pub home_drives_wrapper: Selector,
    pub home_drives_table: Selector,
    pub vis_drives_wrapper: Selector,
    pub vis_drives_table: Selector,
    pub drive_heading: Selector,
    pub header_cell: Selector,
    pub body_row: Selector,
    pub row_cell: Selector,
}

impl TableSelectors {
    pub fn new() -> Self {
        TableSelectors {
            pbp_wrapper: Selector::parse(BoxscoreSelectors::PbpWrapper.selector()).unwrap(),
            pbp_table: Selector::parse(BoxscoreSelectors::PbpTable.selector()).unwrap(),
            home_drives_wrapper: Selector::parse(BoxscoreSelectors::HomeDrivesWrapper.selector()).unwrap(),
            home_drives_table: Selector::parse(BoxscoreSelectors::HomeDrivesTable.selector()).unwrap(),
            vis_drives_wrapper: Selector::parse(BoxscoreSelectors::VisDrivesWrapper.selector()).unwrap(),
            vis_drives_table: Selector::parse(BoxscoreSelectors::VisDrivesTable.selector()).unwrap(),
            drive_heading: Selector::parse(BoxscoreSelectors::DriveHeading.selector()).unwrap(),
            header_cell: Selector::parse(BoxscoreSelectors::HeaderCell.selector()).unwrap(),
            body_row: Selector::parse(BoxscoreSelectors::BodyRow.selector()).unwrap(),
            row_cell: Selector::parse(BoxscoreSelectors::RowCell.selector()).unwrap(),
        }
    }
}

/// Header names plus positional cell text for one stat table.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum DriveSide {
    Home,
    Vis,
}

impl DriveSide {
    fn wrapper_id(self) -> &'static str {
        match self {
            DriveSide::Home => "all_home_drives",
            DriveSide::Vis => "all_vis_drives",
        }
    }
}

/// A drive chart table together with the nickname of the team it belongs to,
/// taken from the wrapper's heading.
#[derive(Debug, Clone)]
pub struct DriveTable {
    pub team: String,
    pub table: HtmlTable,
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn table_from_element(table: ElementRef, selectors: &TableSelectors) -> HtmlTable {
    let headers = table.select(&selectors.header_cell).map(cell_text).collect();
    let rows = table
        .select(&selectors.body_row)
        // Quarter-separator rows carry a class attribute; data rows do not
        .filter(|row| row.value().attr("class").unwrap_or("").is_empty())
        .map(|row| row.select(&selectors.row_cell).map(cell_text).collect())
        .collect();
    HtmlTable { headers, rows }
}

/// Pulls a stat table out of its wrapper div. The table usually sits inside
/// an HTML comment, so the comment body is re-parsed as a fragment; a table
/// served directly is picked up as-is.
fn extract_wrapped_table(
    document: &Html,
    wrapper_selector: &Selector,
    table_selector: &Selector,
    selectors: &TableSelectors,
    wrapper_id: &str,
) -> Result<(HtmlTable, Option<String>), PbpError> {
    let wrapper = document
        .select(wrapper_selector)
        .next()
        .ok_or_else(|| PbpError::missing_table_error(wrapper_id))?;

    let heading = wrapper.select(&selectors.drive_heading).next().map(cell_text);

    if let Some(table) = wrapper.select(table_selector).next() {
        return Ok((table_from_element(table, selectors), heading));
    }

    for node in wrapper.descendants() {
        if let Some(comment) = node.value().as_comment() {
            let fragment = Html::parse_fragment(comment);
            if let Some(table) = fragment.select(table_selector).next() {
                return Ok((table_from_element(table, selectors), heading));
            }
        }
    }

    Err(PbpError::missing_table_error(wrapper_id))
}

pub fn extract_pbp_table(document: &Html, selectors: &TableSelectors) -> Result<HtmlTable, PbpError> {
    let (table, _) = extract_wrapped_table(document, &selectors.pbp_wrapper, &selectors.pbp_table, selectors, "all_pbp")?;
    Ok(table)
}

pub fn extract_drive_table(document: &Html, selectors: &TableSelectors, side: DriveSide) -> Result<DriveTable, PbpError> {
    let (wrapper_selector, table_selector) = match side {
        DriveSide::Home => (&selectors.home_drives_wrapper, &selectors.home_drives_table),
        DriveSide::Vis => (&selectors.vis_drives_wrapper, &selectors.vis_drives_table),
    };

    let (table, heading) = extract_wrapped_table(document, wrapper_selector, table_selector, selectors, side.wrapper_id())?;

    // Heading reads like "Lions Drive Chart"; the first word is the nickname
    let team = heading
        .as_deref()
        .and_then(|heading| heading.split_whitespace().next())
        .map(str::to_string)
        .ok_or_else(|| PbpError::missing_drive_heading_error(side.wrapper_id()))?;

    Ok(DriveTable { team, table })
}
