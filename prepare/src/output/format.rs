use std::fmt::UpperHex;

/// представить массив чисел в текстовом виде (шестнадцатеричные литералы)
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    format_items(
        input.iter().map(|&e| match e.into() == 0 {
            true => "0".to_owned(),
            false => format!("0x{:X}", e),
        }),
        boundary,
    )
}

/// массив знаковых чисел - в десятичном виде
pub fn format_signed_vec(input: &[i32], boundary: usize) -> String
{
    format_items(input.iter().map(|e| e.to_string()), boundary)
}

/// элементы массива через запятую с переносом строк по достижении границы
pub fn format_items<I: IntoIterator<Item = String>>(items: I, boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for item in items {
        let e_str = format!("{}, ", item);

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
