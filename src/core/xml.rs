use crate::domain::model::CountryRecord;
use crate::utils::error::{EtlError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Capital,
    Region,
    Income,
}

/// Extracts the first country element from a World Bank API response body.
///
/// Element names are matched by local name, so the `wb:` namespace prefix
/// is irrelevant. Each field takes its first occurrence in the document;
/// an empty element yields an empty string. Returns `Ok(None)` when the
/// document holds no country element at all, which is how the API answers
/// an unknown code.
pub fn parse_country(xml: &str) -> Result<Option<CountryRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut found = false;
    let mut iso_code: Option<String> = None;
    let mut name: Option<String> = None;
    let mut capital: Option<String> = None;
    let mut region: Option<String> = None;
    let mut income_level: Option<String> = None;
    let mut pending: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"country" if !found => {
                    found = true;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"id" {
                            iso_code = Some(attr.unescape_value()?.into_owned());
                        }
                    }
                }
                b"name" if found && name.is_none() => {
                    name = Some(String::new());
                    pending = Some(Field::Name);
                }
                b"capitalCity" if found && capital.is_none() => {
                    capital = Some(String::new());
                    pending = Some(Field::Capital);
                }
                b"region" if found && region.is_none() => {
                    region = Some(String::new());
                    pending = Some(Field::Region);
                }
                b"incomeLevel" if found && income_level.is_none() => {
                    income_level = Some(String::new());
                    pending = Some(Field::Income);
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"country" if !found => {
                    found = true;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"id" {
                            iso_code = Some(attr.unescape_value()?.into_owned());
                        }
                    }
                }
                b"name" if found && name.is_none() => name = Some(String::new()),
                b"capitalCity" if found && capital.is_none() => capital = Some(String::new()),
                b"region" if found && region.is_none() => region = Some(String::new()),
                b"incomeLevel" if found && income_level.is_none() => {
                    income_level = Some(String::new())
                }
                _ => {}
            },
            Event::Text(t) => {
                if let Some(field) = pending.take() {
                    let text = t.unescape()?.into_owned();
                    match field {
                        Field::Name => name = Some(text),
                        Field::Capital => capital = Some(text),
                        Field::Region => region = Some(text),
                        Field::Income => income_level = Some(text),
                    }
                }
            }
            Event::CData(t) => {
                if let Some(field) = pending.take() {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    match field {
                        Field::Name => name = Some(text),
                        Field::Capital => capital = Some(text),
                        Field::Region => region = Some(text),
                        Field::Income => income_level = Some(text),
                    }
                }
            }
            Event::End(_) => pending = None,
            Event::Eof => break,
            _ => {}
        }
    }

    if !found {
        return Ok(None);
    }

    Ok(Some(CountryRecord {
        iso_code: iso_code.ok_or(EtlError::MissingElement("id"))?,
        name: name.ok_or(EtlError::MissingElement("name"))?,
        capital: capital.ok_or(EtlError::MissingElement("capitalCity"))?,
        region: region.ok_or(EtlError::MissingElement("region"))?,
        income_level: income_level.ok_or(EtlError::MissingElement("incomeLevel"))?,
    }))
}
