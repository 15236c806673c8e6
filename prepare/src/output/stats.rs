use tracing::info;

use crate::tables::relative::RelativeTable;
use crate::tables::UnicodeTables;

/// информация о размерах подготовленных таблиц
pub fn print(tables: &UnicodeTables)
{
    let category = &tables.category;

    info!(
        "категории: строк данных {}, размер данных {}, индекс BMP {}, записей вне BMP {}",
        category.layout.rows.len(),
        category.data().len(),
        category.bmp.len() * 2,
        category.extended.len()
    );

    let ccc = &tables.combining_class.pages;

    info!(
        "CCC: страниц {}, индекс {}, размер данных {}",
        ccc.slots_count(),
        ccc.index().len(),
        ccc.slots_count() * ccc.page_size()
    );

    for table in tables.relative_tables() {
        relative(table);
    }

    info!(
        "композиция: декомпозиций {}, ветвей {}, глубина {}",
        tables.decompositions.len(),
        tables.composition.arms_count(),
        tables.composition.max_depth() + 1
    );

    for (group, code_pages) in tables.code_pages.iter() {
        let pages: usize = code_pages.iter().map(|table| table.reverse.slots_count()).sum();

        info!("{}: кодовых страниц {}, страниц обратных таблиц {}", group, code_pages.len(), pages);
    }
}

fn relative(table: &RelativeTable)
{
    let pages = table.deltas.slots_count();
    let extended_pages = table.auxiliary.iter().filter(|page| page.is_some()).count();

    info!(
        "{}: индекс {}, уникальных страниц {}, расширенных страниц {}, расширенных значений {}, \
        общий размер {}",
        table.name,
        table.deltas.index().len(),
        pages,
        extended_pages,
        table.extended.len(),
        pages * table.deltas.page_size() * 4 + extended_pages * table.deltas.page_size() * 4 + table.extended.len() * 4
    );
}
