use std::collections::{BTreeMap, HashMap, HashSet};

use unicode_tables_source::PropertySet;

use crate::PrepareError;

/// полные канонические декомпозиции: каждый кодпоинт с канонической декомпозицией
/// раскрывается до кодпоинтов без неё, результат упорядочен по CCC
pub fn resolve(properties: &PropertySet) -> Result<BTreeMap<u32, Vec<u32>>, PrepareError>
{
    let mut expanded: HashMap<u32, Vec<u32>> = HashMap::new();

    for codepoint in properties.unicode.values() {
        if codepoint.has_canonical_decomposition() {
            expand(codepoint.code, properties, &mut expanded)?;
        }
    }

    let resolved = expanded
        .into_iter()
        .map(|(code, decomposition)| (code, canonical_order(decomposition, properties)))
        .collect();

    Ok(resolved)
}

/// стабильная сортировка по классу канонического комбинирования
pub fn canonical_order(mut decomposition: Vec<u32>, properties: &PropertySet) -> Vec<u32>
{
    decomposition.sort_by_key(|&code| properties.ccc(code));
    decomposition
}

/// раскрыть декомпозицию кодпоинта и всех кодпоинтов, на которые она ссылается.
/// каждая декомпозиция раскрывается один раз, результат сохраняется в `expanded`
fn expand(
    code: u32,
    properties: &PropertySet,
    expanded: &mut HashMap<u32, Vec<u32>>,
) -> Result<(), PrepareError>
{
    // (кодпоинт, раскрыты ли уже элементы его декомпозиции)
    let mut stack = vec![(code, false)];
    // кодпоинты, раскрытие которых начато, но не закончено
    let mut in_progress = HashSet::new();

    while let Some((current, children_expanded)) = stack.pop() {
        if expanded.contains_key(&current) {
            continue;
        }

        let decomposition = match properties.get(current) {
            Some(codepoint) => &codepoint.decomposition,
            None => continue,
        };

        if children_expanded {
            let mut result = Vec::with_capacity(decomposition.len());

            for element in decomposition {
                match expanded.get(element) {
                    Some(sequence) => result.extend_from_slice(sequence),
                    None => result.push(*element),
                }
            }

            in_progress.remove(&current);
            expanded.insert(current, result);

            continue;
        }

        in_progress.insert(current);
        stack.push((current, true));

        for &element in decomposition {
            let record = properties.get(element).ok_or_else(|| PrepareError::MissingRecord {
                code: element,
                context: format!("декомпозиция U+{:04X}", current),
            })?;

            if !record.has_canonical_decomposition() || expanded.contains_key(&element) {
                continue;
            }

            if in_progress.contains(&element) {
                return Err(PrepareError::DecompositionCycle { code: element });
            }

            stack.push((element, false));
        }
    }

    Ok(())
}
