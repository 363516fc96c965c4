mod category_totals;
pub mod errors;
mod table;
mod transaction;

pub use category_totals::CategoryTotals;
pub use errors::ReportError;
pub use table::TransactionTable;
pub use transaction::Transaction;

/// Category label of transfers and other money movements.
pub const FINANCIAL_OPERATIONS: &str = "Финансовые операции";
/// Operation type label of outgoing (debit) transactions.
pub const DEBIT: &str = "Списание";
/// Category used when a transaction carries none.
pub const UNKNOWN_CATEGORY: &str = "Неизвестная категория";

/// Named columns of a bank export.
///
/// Each column has the header used by the export and an English alias that is
/// accepted on input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Column {
    OperationDate,
    Category,
    Amount,
    OperationAmount,
    Cashback,
    Description,
    Comment,
    Type
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::OperationDate,
        Column::Category,
        Column::Amount,
        Column::OperationAmount,
        Column::Cashback,
        Column::Description,
        Column::Comment,
        Column::Type
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::OperationDate => "Дата операции",
            Column::Category => "Категория",
            Column::Amount => "Сумма",
            Column::OperationAmount => "Сумма операции",
            Column::Cashback => "Кэшбек",
            Column::Description => "Описание операции",
            Column::Comment => "Комментарий",
            Column::Type => "Тип"
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Column::OperationDate => "operation_date",
            Column::Category => "category",
            Column::Amount => "amount",
            Column::OperationAmount => "operation_amount",
            Column::Cashback => "cashback",
            Column::Description => "description",
            Column::Comment => "comment",
            Column::Type => "type"
        }
    }

    pub fn matches(self, name: &str) -> bool {
        name == self.header() || name == self.alias()
    }
}
