use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::pages::IDENTITY_SLOT;
use crate::tables::code_pages::CodePageTable;
use crate::tables::relative::RelativeTable;
use crate::tables::UnicodeTables;
use crate::PrepareError;

use self::format::{format_items, format_num_vec, format_signed_vec};

pub mod compose;
pub mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;
/// указатель на расширенную таблицу отсутствует
pub const NO_EXTENDED: u32 = u32::MAX;

/// содержимое файлов с подготовленными данными: (имя файла, текст)
pub fn render(tables: &UnicodeTables) -> Vec<(String, String)>
{
    let mut files = vec![
        ("category.rs.txt".to_owned(), category(tables)),
        ("combining_class.rs.txt".to_owned(), combining_class(tables)),
    ];

    for table in tables.relative_tables() {
        files.push((format!("{}.rs.txt", table.name), relative(table)));
    }

    files.push(("composition.rs.txt".to_owned(), compose::render(&tables.composition)));

    for (group, code_pages) in tables.code_pages.iter() {
        files.push((format!("{}.rs.txt", group), code_page_group(code_pages)));
    }

    files
}

/// записать подготовленные таблицы в каталог. текст всех файлов готовится до записи первого
pub fn write(tables: &UnicodeTables, dir: &Path) -> Result<Vec<PathBuf>, PrepareError>
{
    let files = render(tables);

    fs::create_dir_all(dir).map_err(|source| PrepareError::Io {
        path: dir.to_owned(),
        source,
    })?;

    let mut written = vec![];

    for (name, contents) in files {
        let path = dir.join(name);

        File::create(&path)
            .and_then(|mut file| write!(file, "{}", contents))
            .map_err(|source| PrepareError::Io {
                path: path.clone(),
                source,
            })?;

        debug!("записан {}", path.display());
        written.push(path);
    }

    stats::print(tables);
    info!("записано файлов: {}", written.len());

    Ok(written)
}

fn category(tables: &UnicodeTables) -> String
{
    let category = &tables.category;

    let extended = category
        .extended
        .iter()
        .map(|(paragraph, row)| format!("(0x{:X}, {})", paragraph, row));

    format!(
        "CategoryData {{\n  \
            data: &[{}  ],\n  \
            bmp: &[{}  ],\n  \
            extended: &[{}  ],\n\
        }}\n",
        format_num_vec(category.data().as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(category.bmp.as_slice(), FORMAT_STRING_LENGTH),
        format_items(extended, FORMAT_STRING_LENGTH),
    )
}

fn combining_class(tables: &UnicodeTables) -> String
{
    let table = &tables.combining_class;
    let mut output = String::new();

    for slot in 0 .. table.pages.slots_count() {
        output.push_str(&format!(
            "static {}: [u8; 256] = [{}];\n\n",
            table.page_name(slot),
            format_num_vec(table.pages.page(slot).values(), FORMAT_STRING_LENGTH)
        ));
    }

    let names = table.lookup_names();

    output.push_str(&format!(
        "pub static CANONICAL_COMBINING_CLASS: [&[u8; 256]; {}] = [{}];\n",
        names.len(),
        format_items(names.iter().map(|name| format!("&{}", name)), FORMAT_STRING_LENGTH)
    ));

    output
}

/// имя страницы смещений
fn relative_page_name(table: &RelativeTable, slot: usize) -> String
{
    match slot == IDENTITY_SLOT {
        true => format!("_{}_identity", table.name),
        false => format!("_{}_{:02X}", table.name, table.deltas.first_page(slot).unwrap_or(0)),
    }
}

fn relative(table: &RelativeTable) -> String
{
    let mut output = format!(
        "// {}: 0 - нет преобразования, -code - см. расширенную таблицу, иначе - смещение\n\n",
        table.name
    );

    for slot in 0 .. table.deltas.slots_count() {
        output.push_str(&format!(
            "static {}: [i32; 256] = [{}];\n\n",
            relative_page_name(table, slot),
            format_signed_vec(table.deltas.page(slot).values(), FORMAT_STRING_LENGTH)
        ));
    }

    for (page, pointers) in table.auxiliary.iter().enumerate() {
        if let Some(pointers) = pointers {
            let pointers: Vec<u32> = pointers.iter().map(|p| p.unwrap_or(NO_EXTENDED)).collect();

            output.push_str(&format!(
                "static _{}_extended_{:02X}: [u32; 256] = [{}];\n\n",
                table.name,
                page,
                format_num_vec(pointers.as_slice(), FORMAT_STRING_LENGTH)
            ));
        }
    }

    output.push_str(&format!(
        "static _{}_extended_values: [u32; {}] = [{}];\n\n",
        table.name,
        table.extended.len(),
        format_num_vec(table.extended.as_slice(), FORMAT_STRING_LENGTH)
    ));

    let upper = table.name.to_uppercase();
    let index = table.deltas.index();

    output.push_str(&format!(
        "pub static {}_INDEX: [&[i32; 256]; {}] = [{}];\n\n",
        upper,
        index.len(),
        format_items(
            index.iter().map(|&slot| format!("&{}", relative_page_name(table, slot))),
            FORMAT_STRING_LENGTH
        )
    ));

    let auxiliary = table.auxiliary.iter().enumerate().map(|(page, pointers)| match pointers {
        Some(_) => format!("Some(&_{}_extended_{:02X})", table.name, page),
        None => "None".to_owned(),
    });

    output.push_str(&format!(
        "pub static {}_EXTENDED_INDEX: [Option<&[u32; 256]>; {}] = [{}];\n",
        upper,
        table.auxiliary.len(),
        format_items(auxiliary, FORMAT_STRING_LENGTH)
    ));

    output
}

fn code_page_group(code_pages: &[CodePageTable]) -> String
{
    let mut output = format!(
        "static _undefined: [u8; 256] = [{}];\n\n",
        format_num_vec(crate::tables::code_pages::undefined_page().values(), FORMAT_STRING_LENGTH)
    );

    for table in code_pages {
        let upper = table.name.to_uppercase();

        output.push_str(&format!(
            "pub static {}_TO_UNICODE: [u16; 256] = [{}];\n\n",
            upper,
            format_num_vec(table.forward.as_slice(), FORMAT_STRING_LENGTH)
        ));

        let page_name = |slot: usize| match slot == IDENTITY_SLOT {
            true => "_undefined".to_owned(),
            false => format!("_{}_{:02X}", table.name, table.reverse.first_page(slot).unwrap_or(0)),
        };

        for slot in 1 .. table.reverse.slots_count() {
            output.push_str(&format!(
                "static {}: [u8; 256] = [{}];\n\n",
                page_name(slot),
                format_num_vec(table.reverse.page(slot).values(), FORMAT_STRING_LENGTH)
            ));
        }

        let index = table.reverse.index();

        output.push_str(&format!(
            "pub static UNICODE_TO_{}: [&[u8; 256]; {}] = [{}];\n\n",
            upper,
            index.len(),
            format_items(index.iter().map(|&slot| format!("&{}", page_name(slot))), FORMAT_STRING_LENGTH)
        ));
    }

    output
}
