use std::fmt;

use super::model::Metadata;
use crate::schema::global_attrs::*;

fn write_entries(f: &mut fmt::Formatter<'_>, name: &str, values: &[String]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index == 0 {
            writeln!(f, "    {name}: {value}")?;
        } else {
            writeln!(f, "    {:width$}  {value}", "", width = name.len())?;
        }
    }
    Ok(())
}

/// One line per attribute. Terms of use are cut to their first 50
/// characters; repeatable attributes continue on indented lines.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        writeln!(f, "ImagCDF Global Attributes:")?;
        writeln!(f, "    {FORMAT_DESCRIPTION}: {}", self.format_description)?;
        writeln!(f, "    {FORMAT_VERSION}: {}", self.format_version)?;
        writeln!(f, "    {TITLE}: {}", self.title)?;
        writeln!(f, "    {IAGA_CODE}: {}", self.iaga_code)?;
        writeln!(f, "    {ELEMENTS_RECORDED}: {}", self.elements_recorded)?;
        writeln!(f, "    {PUBLICATION_LEVEL}: {}", self.publication_level)?;
        writeln!(f, "    {PUBLICATION_DATE}: {}", self.publication_date)?;
        writeln!(f, "    {OBSERVATORY_NAME}: {}", self.observatory_name)?;
        writeln!(f, "    {LATITUDE}: {:.6}", self.latitude)?;
        writeln!(f, "    {LONGITUDE}: {:.6}", self.longitude)?;
        writeln!(f, "    {ELEVATION}: {:.6}", self.elevation)?;
        writeln!(f, "    {INSTITUTION}: {}", self.institution)?;
        writeln!(f, "    {VECTOR_SENS_ORIENT}: {}", optional(&self.vector_sens_orient))?;
        writeln!(f, "    {STANDARD_LEVEL}: {}", self.standard_level)?;
        writeln!(f, "    {STANDARD_NAME}: {}", optional(&self.standard_name))?;
        writeln!(f, "    {STANDARD_VERSION}: {}", optional(&self.standard_version))?;
        writeln!(f, "    {PARTIAL_STAND_DESC}: {}", optional(&self.partial_stand_desc))?;
        writeln!(f, "    {SOURCE}: {}", self.source)?;
        let terms: String = optional(&self.terms_of_use).chars().take(50).collect();
        writeln!(f, "    {TERMS_OF_USE}: {}", terms.replace('\n', " "))?;
        writeln!(f, "    {UNIQUE_IDENTIFIER}: {}", optional(&self.unique_identifier))?;
        write_entries(f, PARENT_IDENTIFIERS, &self.parent_identifiers)?;
        write_entries(f, REFERENCE_LINKS, &self.reference_links)
    }
}
