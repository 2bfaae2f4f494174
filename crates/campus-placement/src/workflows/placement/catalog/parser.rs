use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{Drive, DriveCategory, DriveId, EligibilityCriteria};
use super::CatalogImportError;

pub(crate) fn parse_drives<R: Read>(reader: R) -> Result<Vec<Drive>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut drives = Vec::new();

    for (index, record) in csv_reader.deserialize::<DriveRow>().enumerate() {
        let row = record?;
        let line = index + 1;
        drives.push(row.into_drive(line)?);
    }

    Ok(drives)
}

#[derive(Debug, Deserialize)]
struct DriveRow {
    id: String,
    company: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    role: String,
    category: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    ctc: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    deadline: Option<String>,
    min_cgpa: String,
    max_backlogs: String,
    #[serde(default)]
    allowed_branches: String,
    #[serde(default)]
    required_skills: String,
    #[serde(default)]
    eligible_graduation_years: String,
}

impl DriveRow {
    fn into_drive(self, line: usize) -> Result<Drive, CatalogImportError> {
        if self.id.is_empty() {
            return Err(invalid(line, "drive id is empty".to_string()));
        }

        let category = DriveCategory::parse(&self.category)
            .ok_or_else(|| invalid(line, format!("unknown category '{}'", self.category)))?;

        let deadline = self
            .deadline
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|err| invalid(line, format!("invalid deadline '{raw}' ({err})")))
            })
            .transpose()?;

        let min_cgpa = self
            .min_cgpa
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| invalid(line, format!("invalid min_cgpa '{}'", self.min_cgpa)))?;
        let max_backlogs = self
            .max_backlogs
            .parse::<u32>()
            .map_err(|_| invalid(line, format!("invalid max_backlogs '{}'", self.max_backlogs)))?;

        let eligible_graduation_years = split_list(&self.eligible_graduation_years)
            .into_iter()
            .map(|year| {
                year.parse::<u16>()
                    .map_err(|_| invalid(line, format!("invalid graduation year '{year}'")))
            })
            .collect::<Result<Vec<u16>, _>>()?;

        Ok(Drive {
            id: DriveId(self.id),
            company_name: self.company,
            title: self.title,
            description: self.description,
            role: self.role,
            category,
            location: self.location,
            ctc: self.ctc,
            deadline,
            criteria: EligibilityCriteria {
                min_cgpa,
                max_backlogs,
                allowed_branches: split_list(&self.allowed_branches),
                required_skills: split_list(&self.required_skills),
                eligible_graduation_years,
            },
        })
    }
}

fn invalid(line: usize, reason: String) -> CatalogImportError {
    CatalogImportError::InvalidRow { line, reason }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(split_list(" CSE | IT ||"), vec!["CSE", "IT"]);
        assert!(split_list("").is_empty());
    }
}
