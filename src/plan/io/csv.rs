//! CSV writing for plan assignments.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::plan::Plan;

impl Plan {
    /// Assignments as a two-column `geo_id,district` DataFrame.
    fn assignments_frame(&self) -> Result<DataFrame> {
        let (geo_ids, districts) = self.assignments().into_iter()
            .map(|(tract, district)| (tract.to_string(), district.0))
            .unzip::<_, _, Vec<_>, Vec<_>>();

        Ok(DataFrame::new(vec![
            Series::new("geo_id".into(), geo_ids).into(),
            Series::new("district".into(), districts).into(),
        ])?)
    }

    /// Write tract assignments to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.assignments_frame()?;
        let file = File::create(path)
            .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
        CsvWriter::new(file)
            .finish(&mut df)
            .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
    }

    /// Tract assignments as CSV text.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut df = self.assignments_frame()?;
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .finish(&mut df)
            .context("[io::csv::write] Failed to write CSV to string")?;
        String::from_utf8(buffer).context("[io::csv::write] CSV output is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use crate::{map::TractId, partition::DistrictId, plan::{DistrictRecord, Plan}};

    fn sample_plan() -> Plan {
        Plan::new(100, vec![
            DistrictRecord::new(DistrictId(0), 100, vec![TractId::new("007"), TractId::new("008")]),
            DistrictRecord::new(DistrictId(1), 50, vec![TractId::new("009")]),
        ])
    }

    #[test]
    fn csv_string_lists_every_assignment() {
        let csv = sample_plan().to_csv_string().unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines, vec!["geo_id,district", "007,0", "008,0", "009,1"]);
    }

    #[test]
    fn csv_file_matches_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        let plan = sample_plan();
        plan.write_csv(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), plan.to_csv_string().unwrap());
    }
}
