#[macro_use]
extern crate lazy_static;

use std::fs;
use std::path::{Path, PathBuf};

use unicode_tables_prepare::output;
use unicode_tables_prepare::tables::compositions::describe;
use unicode_tables_prepare::tables::UnicodeTables;
use unicode_tables_prepare::PrepareError;
use unicode_tables_source::PropertySet;

lazy_static! {
    static ref PROPERTIES: PropertySet = PropertySet::load(Path::new("./../source/data/test")).unwrap();
    static ref TABLES: UnicodeTables =
        UnicodeTables::prepare(&PROPERTIES, Some(Path::new("./../source/data/test/codepages"))).unwrap();
}

fn temp_dir(name: &str) -> PathBuf
{
    let dir = std::env::temp_dir().join(format!("unicode_tables_prepare_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    dir
}

#[test]
fn write_files()
{
    let dir = temp_dir("write");
    let written = output::write(&TABLES, &dir).unwrap();

    let mut names: Vec<String> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "case_folding.rs.txt",
            "category.rs.txt",
            "codepages_cpx.rs.txt",
            "codepages_iso8859.rs.txt",
            "codepages_win125x.rs.txt",
            "combining_class.rs.txt",
            "composition.rs.txt",
            "decomposition.rs.txt",
            "lowercase.rs.txt",
            "titlecase.rs.txt",
            "uppercase.rs.txt",
        ]
    );

    for path in written.iter() {
        assert!(path.starts_with(&dir));
        assert!(!fs::read_to_string(path).unwrap().is_empty());
    }

    // содержимое файлов совпадает с отрисовкой
    for (name, content) in output::render(&TABLES) {
        assert_eq!(fs::read_to_string(dir.join(&name)).unwrap(), content, "{}", name);
    }

    let composition = fs::read_to_string(dir.join("composition.rs.txt")).unwrap();
    assert!(composition.contains("pub fn compose(a: u32, b: u32, c: u32, d: u32) -> u32"));
    assert!(composition.contains("0x1F82"));

    let win125x = fs::read_to_string(dir.join("codepages_win125x.rs.txt")).unwrap();
    assert!(win125x.contains("WINDOWS1252_TO_UNICODE"));
    assert!(win125x.contains("UNICODE_TO_WINDOWS1252"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn write_into_file()
{
    let dir = temp_dir("blocked");
    fs::create_dir_all(&dir).unwrap();

    // каталог вывода не может быть создан внутри обычного файла
    let file = dir.join("occupied");
    fs::write(&file, "").unwrap();

    match output::write(&TABLES, &file.join("output")) {
        Err(PrepareError::Io { path, .. }) => assert!(path.starts_with(&file)),
        other => panic!("ожидалась ошибка ввода-вывода: {:?}", other),
    }

    fs::remove_dir_all(&dir).unwrap();
}

/// последовательности композиции и их результаты
#[test]
fn composition_listing()
{
    for (&code, sequence) in TABLES.decompositions.iter() {
        let result = TABLES.composition.evaluate(sequence);

        println!("U+{:04X}: {}", code, describe(sequence, result));
    }
}
