use super::report::{Section, ValidationCheck, ValidationReport};
use crate::container::Container;
use crate::metadata::{read_metadata_unvalidated, Metadata};
use crate::schema::{SCALAR_ELEMENTS, VECTOR_ELEMENTS};

const READABLE: &str = "Global attributes readable";
const CANONICAL: &str = "Title, description and format version";
const ELEMENTS: &str = "Elements recorded";

/// Read the global metadata and check it against the schema rules.
///
/// Returns the metadata when it could be read at all, so the channel checks
/// can still run on a file whose metadata fails validation.
pub(super) fn check_metadata<C: Container + ?Sized>(
    container: &mut C,
    report: &mut ValidationReport,
) -> Option<Metadata> {
    let metadata = match read_metadata_unvalidated(container) {
        Ok(metadata) => {
            report.add_check(ValidationCheck::ok(Section::Metadata, READABLE));
            metadata
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed(Section::Metadata, READABLE, e.to_string()));
            return None;
        }
    };

    report.add_check(match metadata.validate() {
        Ok(()) => ValidationCheck::ok(Section::Metadata, CANONICAL),
        Err(e) => ValidationCheck::failed(Section::Metadata, CANONICAL, e.to_string()),
    });

    let unknown: String = metadata
        .elements()
        .filter(|c| {
            let upper = c.to_ascii_uppercase();
            !VECTOR_ELEMENTS.contains(upper) && !SCALAR_ELEMENTS.contains(upper)
        })
        .collect();
    let elements = if metadata.elements().next().is_none() {
        ValidationCheck::warning(Section::Metadata, ELEMENTS, "ElementsRecorded is empty")
    } else if !unknown.is_empty() {
        ValidationCheck::warning(
            Section::Metadata,
            ELEMENTS,
            format!("no default time series for element(s) '{unknown}'"),
        )
    } else {
        ValidationCheck::ok(Section::Metadata, ELEMENTS)
    };
    report.add_check(elements);

    Some(metadata)
}
