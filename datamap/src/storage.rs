use log::info;
use rusqlite::{Connection, OptionalExtension, Params, Row, Transaction};
use std::path::Path;

pub struct Storage {
    connection: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        info!("Open storage {}", path.as_ref().display());
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    pub fn setup(&self, schema: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(schema)
    }

    pub fn execute<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<usize> {
        self.connection.prepare_cached(sql)?.execute(params)
    }

    pub fn find_all<T, P, M>(&self, sql: &str, params: P, map: M) -> rusqlite::Result<Vec<T>>
    where
        P: Params,
        M: FnMut(&Row) -> rusqlite::Result<T>,
    {
        let mut statement = self.connection.prepare_cached(sql)?;
        let rows = statement.query_map(params, map)?;
        let values = rows.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(values)
    }

    pub fn find_one<T, P, M>(&self, sql: &str, params: P, map: M) -> rusqlite::Result<Option<T>>
    where
        P: Params,
        M: FnOnce(&Row) -> rusqlite::Result<T>,
    {
        self.connection.query_row(sql, params, map).optional()
    }

    pub fn count<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<usize> {
        let count: i64 = self.connection.query_row(sql, params, |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }

    /// Runs all statements issued by `change` atomically.
    pub fn transaction<T, F>(&self, change: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Transaction) -> rusqlite::Result<T>,
    {
        let transaction = self.connection.unchecked_transaction()?;
        let result = change(&transaction)?;
        transaction.commit()?;
        Ok(result)
    }
}
