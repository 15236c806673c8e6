//! Дерево композиций: последовательности полных канонических декомпозиций, ведущие к
//! составным кодпоинтам, и процедура выбора, в которую это дерево превращается.
//!
//! процедура принимает до четырёх кодпоинтов и возвращает самую длинную совпавшую
//! композицию вместе с количеством использованных кодпоинтов

use std::collections::BTreeMap;

use tracing::debug;
use unicode_tables_source::PropertySet;

use crate::error::format_codes;
use crate::PrepareError;

/// максимальная длина последовательности, которую принимает процедура композиции
pub const MAX_COMPOSITION_LENGTH: usize = 4;
/// композиция не найдена
pub const NO_MATCH: u32 = u32::MAX;
/// сдвиг количества использованных кодпоинтов в закодированном результате
pub const LENGTH_SHIFT: u32 = 24;

/// результат композиции: кодпоинт и количество использованных входных кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite
{
    pub code: u32,
    pub length: u8,
}

impl Composite
{
    /// code | length << 24
    #[inline]
    pub fn encode(&self) -> u32
    {
        self.code | ((self.length as u32) << LENGTH_SHIFT)
    }
}

/// закодированный результат, NO_MATCH - если композиции нет
#[inline]
pub fn encode(result: Option<Composite>) -> u32
{
    match result {
        Some(composite) => composite.encode(),
        None => NO_MATCH,
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode
{
    /// составной кодпоинт, если путь до узла - полная последовательность
    terminal: Option<u32>,
    children: BTreeMap<u32, TrieNode>,
}

impl TrieNode
{
    #[inline]
    fn is_leaf(&self) -> bool
    {
        self.children.is_empty()
    }
}

/// префиксное дерево последовательностей композиции
#[derive(Debug, Clone, Default)]
pub struct CompositionTrie
{
    root: BTreeMap<u32, TrieNode>,
    len: usize,
}

impl CompositionTrie
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить последовательность, ведущую к составному кодпоинту
    pub fn insert(&mut self, sequence: &[u32], composite: u32) -> Result<(), PrepareError>
    {
        let (&last, prefix) = sequence
            .split_last()
            .ok_or(PrepareError::EmptySequence { code: composite })?;

        if sequence.len() > MAX_COMPOSITION_LENGTH {
            return Err(PrepareError::SequenceTooLong {
                code: composite,
                length: sequence.len(),
            });
        }

        let mut level = &mut self.root;

        for element in prefix {
            level = &mut level.entry(*element).or_default().children;
        }

        let node = level.entry(last).or_default();

        match node.terminal {
            Some(existing) if existing != composite => {
                return Err(PrepareError::AmbiguousComposition {
                    sequence: sequence.to_vec(),
                    existing,
                    conflicting: composite,
                })
            }
            Some(_) => (),
            None => {
                node.terminal = Some(composite);
                self.len += 1;
            }
        }

        Ok(())
    }

    /// дерево из полных канонических декомпозиций. синглтоны (кодпоинты, декомпозиция
    /// которых в UCD состоит из одного кодпоинта) не комбинируются и пропускаются
    pub fn from_decompositions(
        properties: &PropertySet,
        decompositions: &BTreeMap<u32, Vec<u32>>,
    ) -> Result<Self, PrepareError>
    {
        let mut trie = Self::new();
        let mut singletons = 0;

        for (&code, decomposition) in decompositions.iter() {
            let is_singleton = properties
                .get(code)
                .map(|codepoint| codepoint.decomposition.len() == 1)
                .unwrap_or(false);

            if is_singleton {
                singletons += 1;
                continue;
            }

            trie.insert(decomposition, code)?;
        }

        debug!("композиции: {}, пропущено синглтонов: {}", trie.len(), singletons);

        Ok(trie)
    }

    /// количество последовательностей
    #[inline]
    pub fn len(&self) -> usize
    {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// превратить дерево в процедуру выбора
    pub fn lower(&self) -> Dispatch
    {
        lower_level(&self.root, 0, None)
    }
}

/// выбор по одному входному кодпоинту
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch
{
    /// номер входного кодпоинта
    pub depth: usize,
    /// ветви в порядке возрастания ключа
    pub arms: Vec<Arm>,
    /// результат, если ни одна ветвь не совпала
    pub default: Option<Composite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm
{
    pub key: u32,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action
{
    Return(Option<Composite>),
    /// один-два варианта следующего кодпоинта - цепочка сравнений
    Chain(Chain),
    Dispatch(Dispatch),
}

/// цепочка сравнений следующего кодпоинта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain
{
    pub depth: usize,
    pub tests: Vec<(u32, Composite)>,
    pub default: Option<Composite>,
}

impl Dispatch
{
    /// выполнить процедуру над входными кодпоинтами (недостающие считаются несовпавшими)
    pub fn evaluate(&self, input: &[u32]) -> Option<Composite>
    {
        let key = match input.get(self.depth) {
            Some(&key) => key,
            None => return self.default,
        };

        let arm = match self.arms.binary_search_by_key(&key, |arm| arm.key) {
            Ok(i) => &self.arms[i],
            Err(_) => return self.default,
        };

        match &arm.action {
            Action::Return(result) => *result,
            Action::Chain(chain) => chain.evaluate(input),
            Action::Dispatch(dispatch) => dispatch.evaluate(input),
        }
    }

    /// максимальная глубина вложенности выбора и цепочек
    pub fn max_depth(&self) -> usize
    {
        self.arms
            .iter()
            .map(|arm| match &arm.action {
                Action::Return(_) => self.depth,
                Action::Chain(chain) => chain.depth,
                Action::Dispatch(dispatch) => dispatch.max_depth(),
            })
            .max()
            .unwrap_or(self.depth)
    }

    /// количество ветвей на всех уровнях
    pub fn arms_count(&self) -> usize
    {
        self.arms
            .iter()
            .map(|arm| match &arm.action {
                Action::Dispatch(dispatch) => 1 + dispatch.arms_count(),
                Action::Chain(chain) => 1 + chain.tests.len(),
                Action::Return(_) => 1,
            })
            .sum()
    }
}

impl Chain
{
    pub fn evaluate(&self, input: &[u32]) -> Option<Composite>
    {
        let key = match input.get(self.depth) {
            Some(&key) => key,
            None => return self.default,
        };

        self.tests
            .iter()
            .find(|(test, _)| *test == key)
            .map(|(_, composite)| *composite)
            .or(self.default)
    }
}

/// уровень дерева -> выбор по кодпоинту номер depth. default - самая длинная композиция,
/// найденная на предыдущих уровнях
fn lower_level(level: &BTreeMap<u32, TrieNode>, depth: usize, default: Option<Composite>) -> Dispatch
{
    let arms = level
        .iter()
        .map(|(&key, node)| {
            let own = node.terminal.map(|code| Composite {
                code,
                length: (depth + 1) as u8,
            });

            let action = match node.is_leaf() {
                true => Action::Return(own.or(default)),
                false => {
                    let default = own.or(default);

                    match node.children.len() <= 2 && node.children.values().all(TrieNode::is_leaf) {
                        true => Action::Chain(Chain {
                            depth: depth + 1,
                            tests: node
                                .children
                                .iter()
                                .filter_map(|(&key, child)| {
                                    child.terminal.map(|code| {
                                        (
                                            key,
                                            Composite {
                                                code,
                                                length: (depth + 2) as u8,
                                            },
                                        )
                                    })
                                })
                                .collect(),
                            default,
                        }),
                        false => Action::Dispatch(lower_level(&node.children, depth + 1, default)),
                    }
                }
            };

            Arm { key, action }
        })
        .collect();

    Dispatch {
        depth,
        arms,
        default,
    }
}

impl std::fmt::Display for Composite
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "U+{:04X} ({})", self.code, self.length)
    }
}

/// описание последовательности для отладочного вывода
pub fn describe(sequence: &[u32], result: Option<Composite>) -> String
{
    match result {
        Some(composite) => format!("{} -> {}", format_codes(sequence), composite),
        None => format!("{} -> NO_MATCH", format_codes(sequence)),
    }
}
