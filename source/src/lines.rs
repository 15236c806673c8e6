/// строки файла данных UCD: номер строки (с 1) и содержимое без комментария
/// пустые строки и строки, состоящие только из комментария, пропускаются
pub fn data_lines(data: &str) -> impl Iterator<Item = (usize, &str)>
{
    data.lines().enumerate().filter_map(|(i, line)| {
        let line = match line.split_once('#') {
            Some((content, _)) => content,
            None => line,
        };

        let line = line.trim();

        match line.is_empty() {
            true => None,
            false => Some((i + 1, line)),
        }
    })
}

/// поля строки, разделенные точкой с запятой
pub fn fields(line: &str) -> Vec<&str>
{
    line.split(';').map(|field| field.trim()).collect()
}
