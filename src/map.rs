#[derive(Debug, Clone)]
pub struct Map<T> {
    number_of_rows: i32,
    number_of_columns: i32,
    row_data: Vec<Vec<T>>,
}

impl<T> Map<T>
where
    T: Clone,
{
    pub fn new(number_of_columns: i32, number_of_rows: i32, starting_value: &T) -> Map<T> {
        let row_data = (0..number_of_rows)
            .map(|_| {
                (0..number_of_columns)
                    .map(|_| starting_value.clone())
                    .collect()
            })
            .collect();
        Map {
            number_of_rows,
            number_of_columns,
            row_data,
        }
    }

    /// Builds a map from ragged rows, padding short rows with `fill`.
    pub fn from_rows(rows: Vec<Vec<T>>, fill: &T) -> Map<T> {
        let number_of_columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let row_data: Vec<Vec<T>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(number_of_columns, fill.clone());
                row
            })
            .collect();

        Map {
            number_of_rows: row_data.len() as i32,
            number_of_columns: number_of_columns as i32,
            row_data,
        }
    }

    pub fn number_of_rows(&self) -> i32 {
        self.number_of_rows
    }

    pub fn number_of_columns(&self) -> i32 {
        self.number_of_columns
    }

    pub fn at(&self, (col, row): (i32, i32)) -> Option<&T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&self.row_data[row as usize][col as usize])
    }

    pub fn at_mut(&mut self, (col, row): (i32, i32)) -> Option<&mut T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&mut self.row_data[row as usize][col as usize])
    }

    pub fn in_bounds(&self, (col, row): (i32, i32)) -> bool {
        !(row < 0 || row >= self.number_of_rows || col < 0 || col >= self.number_of_columns)
    }
}
