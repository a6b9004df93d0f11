//! Observation to table row mapping.

use crate::document::Document;
use crate::error::{Error, RowError};
use crate::locale::{DateLocale, machine_date};
use crate::model::Observation;

use super::primitives::{
    add_content_to_row, create_anchor, create_img, create_table_row, create_text, create_time,
    to_yes_no,
};

/// Number of cells in every observation row.
pub const ROW_CELLS: usize = 7;

/// Converts an observation into a table row:
///
/// ```html
/// <tr id="67868131">
///   <td><a href="{uri}"><img src="{photoUrl}" alt="Muskrat"></a></td>
///   <td><time datetime="2020-09-18">9/18/2020</time></td>
///   <td><a href="{wikipediaUrl}">Muskrat</a></td>
///   <td>No</td>
///   <td>Yes</td>
///   <td>No</td>
///   <td>No</td>
/// </tr>
/// ```
///
/// The row always has [`ROW_CELLS`] cells. Missing content leaves the
/// affected part out of its cell:
/// - no photo URL: the first cell is empty;
/// - no observation URI: the image is not linked;
/// - no Wikipedia URL: the name is plain text;
/// - no date: the second cell is empty;
/// - empty name: the third cell is empty and the image alt text is empty.
///
/// Fails only when the observation id is missing or blank.
pub fn build_row_for_observation<D: Document>(
    doc: &mut D,
    observation: &Observation,
    locale: DateLocale,
) -> Result<D::Node, RowError> {
    let Some(id) = observation.row_id() else {
        return Err(RowError::MissingId);
    };

    let id = id.to_string();
    log::debug!("[row] building row {id}");

    let mut row = create_table_row(doc, &id);

    // Photo, linked to the observation page
    let photo = match &observation.photo_url {
        Some(src) => {
            let img = create_img(doc, src.as_str(), &observation.name);
            match &observation.uri {
                Some(uri) => Some(create_anchor(doc, uri.as_str(), img)),
                None => Some(img),
            }
        }
        None => {
            log::trace!("[row] {id} has no photo");
            None
        }
    };
    add_content_to_row(doc, photo, &mut row);

    let time = match observation.date {
        Some(date) => Some(create_time(
            doc,
            &machine_date(date),
            &locale.format_date(date),
        )),
        None => {
            log::trace!("[row] {id} has no date");
            None
        }
    };
    add_content_to_row(doc, time, &mut row);

    // Name, linked to its Wikipedia page
    let name = if observation.name.is_empty() {
        None
    } else {
        let text = create_text(doc, &observation.name);
        match &observation.wikipedia_url {
            Some(href) => Some(create_anchor(doc, href.as_str(), text)),
            None => Some(text),
        }
    };
    add_content_to_row(doc, name, &mut row);

    for flag in observation.flags() {
        let text = create_text(doc, to_yes_no(flag));
        add_content_to_row(doc, Some(text), &mut row);
    }

    Ok(row)
}

/// Builds the row for the observation whose id renders as `id`.
pub fn build_row_for_id<D: Document>(
    doc: &mut D,
    observations: &[Observation],
    id: &str,
    locale: DateLocale,
) -> Result<D::Node, Error> {
    let observation = observations
        .iter()
        .find(|o| o.row_id().is_some_and(|row_id| row_id.to_string() == id))
        .ok_or_else(|| Error::NotFound(id.to_string()))?;

    Ok(build_row_for_observation(doc, observation, locale)?)
}
