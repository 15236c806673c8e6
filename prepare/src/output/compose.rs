use crate::tables::compositions::{Action, Chain, Composite, Dispatch, MAX_COMPOSITION_LENGTH};

/// имена аргументов процедуры композиции
const ARGUMENTS: [char; MAX_COMPOSITION_LENGTH] = ['a', 'b', 'c', 'd'];
/// количество использованных кодпоинтов
const LENGTH_FLAGS: [&str; MAX_COMPOSITION_LENGTH + 1] =
    ["", "ONE_POINT", "TWO_POINTS", "THREE_POINTS", "FOUR_POINTS"];

/// процедура композиции в виде функции на Rust:
/// уровни выбора - match, короткие цепочки - if / else
pub fn render(dispatch: &Dispatch) -> String
{
    let mut output = String::new();

    output.push_str("pub const NO_MATCH: u32 = 0xFFFFFFFF;\n\n");

    for (length, flag) in LENGTH_FLAGS.iter().enumerate().skip(1) {
        output.push_str(&format!("pub const {}: u32 = {} << 24;\n", flag, length));
    }

    output.push_str(
        "\n#[allow(unused_variables)]\n\
        pub fn compose(a: u32, b: u32, c: u32, d: u32) -> u32\n\
        {\n",
    );

    output.push_str(&indent(1));
    render_dispatch(&mut output, dispatch, 1);
    output.push_str("\n}\n");

    output
}

fn render_dispatch(output: &mut String, dispatch: &Dispatch, level: usize)
{
    output.push_str(&format!("match {} {{\n", ARGUMENTS[dispatch.depth]));

    for arm in dispatch.arms.iter() {
        output.push_str(&format!("{}0x{:X} => ", indent(level + 1), arm.key));

        match &arm.action {
            Action::Return(result) => output.push_str(&format_result(*result)),
            Action::Chain(chain) => render_chain(output, chain, level + 1),
            Action::Dispatch(nested) => render_dispatch(output, nested, level + 1),
        }

        output.push_str(",\n");
    }

    output.push_str(&format!(
        "{}_ => {},\n{}}}",
        indent(level + 1),
        format_result(dispatch.default),
        indent(level)
    ));
}

fn render_chain(output: &mut String, chain: &Chain, level: usize)
{
    let argument = ARGUMENTS[chain.depth];

    for (i, (key, composite)) in chain.tests.iter().enumerate() {
        if i > 0 {
            output.push_str(" else ");
        }

        output.push_str(&format!(
            "if {} == 0x{:X} {{\n{}{}\n{}}}",
            argument,
            key,
            indent(level + 1),
            format_result(Some(*composite)),
            indent(level)
        ));
    }

    output.push_str(&format!(
        " else {{\n{}{}\n{}}}",
        indent(level + 1),
        format_result(chain.default),
        indent(level)
    ));
}

fn format_result(result: Option<Composite>) -> String
{
    match result {
        Some(composite) => format!("0x{:X} | {}", composite.code, LENGTH_FLAGS[composite.length as usize]),
        None => "NO_MATCH".to_owned(),
    }
}

#[inline]
fn indent(level: usize) -> String
{
    "    ".repeat(level)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::tables::compositions::CompositionTrie;

    #[test]
    fn rendered_function()
    {
        let mut trie = CompositionTrie::new();

        trie.insert(&[0x65, 0x301], 0xE9).unwrap();
        trie.insert(&[0x65, 0x300], 0xE8).unwrap();
        trie.insert(&[0x1D157, 0x1D165], 0x1D15E).unwrap();

        let output = render(&trie.lower());

        let expected = "\
    match a {
        0x65 => if b == 0x300 {
            0xE8 | TWO_POINTS
        } else if b == 0x301 {
            0xE9 | TWO_POINTS
        } else {
            NO_MATCH
        },
        0x1D157 => if b == 0x1D165 {
            0x1D15E | TWO_POINTS
        } else {
            NO_MATCH
        },
        _ => NO_MATCH,
    }
}
";

        assert!(output.starts_with("pub const NO_MATCH: u32 = 0xFFFFFFFF;\n"));
        assert!(output.contains(
            "pub const ONE_POINT: u32 = 1 << 24;\npub const TWO_POINTS: u32 = 2 << 24;\n\
            pub const THREE_POINTS: u32 = 3 << 24;\npub const FOUR_POINTS: u32 = 4 << 24;\n"
        ));
        assert!(output.contains("pub fn compose(a: u32, b: u32, c: u32, d: u32) -> u32\n{\n"));
        assert!(output.ends_with(expected), "{}", output);
    }

    #[test]
    fn nested_match()
    {
        let mut trie = CompositionTrie::new();

        trie.insert(&[0x61, 0x300], 0xE0).unwrap();
        trie.insert(&[0x61, 0x301], 0xE1).unwrap();
        trie.insert(&[0x61, 0x302], 0xE2).unwrap();

        let output = render(&trie.lower());

        assert!(output.contains("        0x61 => match b {\n            0x300 => 0xE0 | TWO_POINTS,\n"));
        assert!(output.contains("            _ => NO_MATCH,\n        },\n"));
    }
}
