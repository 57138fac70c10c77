use ap_core::{Context, LedgerError, Result};
use ap_storage::{KeyValueStore, RecordCodec};
use log::{info, warn};

use crate::types::AssetRecord;
use crate::App;

/// Demo records seeded by `InitLedger`. Kept verbatim for compatibility with
/// callers that expect these exact tuples.
const SEED_ASSETS: [(&str, &str, &str, &str, &str); 6] = [
    ("Pic1", "e1", "insdfd", "20", "2020-12-05 12:00:00"),
    ("Pic2", "e2", "inasdd", "30", "2020-12-05 12:00:00"),
    ("Pic3", "e3", "in1222", "40", "2020-12-05 12:00:00"),
    ("Pic4", "e4", "out222", "60", "2020-11-05 12:00:00"),
    ("Pic5", "e5", "in2222", "70", "2021-12-05 12:00:00"),
    ("Pic6", "e6", "out222", "30", "2020-12-05 12:00:00"),
];

/// A key is live iff it holds a non-empty value.
fn has_live_value(state: &dyn KeyValueStore, id: &str) -> Result<bool> {
    Ok(state.get(id)?.is_some_and(|bytes| !bytes.is_empty()))
}

fn live_value(state: &dyn KeyValueStore, id: &str) -> Result<Vec<u8>> {
    match state.get(id)? {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => {
            warn!(target: "asset", "asset {} does not exist", id);
            Err(LedgerError::NotFound { id: id.to_owned() })
        }
    }
}

impl<C: RecordCodec> App<C> {
    /// Seeds the ledger with the fixed demo records. Not idempotent: any
    /// pre-existing seed key aborts with `AlreadyExists`.
    pub fn init_ledger(&self, ctx: &Context) -> Result<()> {
        for (id, event_id, hash_context, path, create_date) in SEED_ASSETS {
            self.create_asset(ctx, id, event_id, hash_context, path, create_date)?;
        }
        info!(target: "asset", "seeded {} demo assets", SEED_ASSETS.len());
        Ok(())
    }

    pub fn create_asset(
        &self,
        ctx: &Context,
        id: &str,
        event_id: &str,
        hash_context: &str,
        path: &str,
        create_date: &str,
    ) -> Result<AssetRecord> {
        let mut state = ctx.state.write();

        if has_live_value(&*state, id)? {
            warn!(target: "asset", "asset {} already exists", id);
            return Err(LedgerError::AlreadyExists { id: id.to_owned() });
        }

        let record = AssetRecord::new(id, event_id, hash_context, path, create_date);
        let bytes = self.codec.encode(&record)?;
        state.put(id, bytes)?;

        Ok(record)
    }

    /// Pure pass-through read: the stored value is decoded and returned with
    /// no field recomputed.
    pub fn read_asset(&self, ctx: &Context, id: &str) -> Result<AssetRecord> {
        let state = ctx.state.read();
        let bytes = live_value(&*state, id)?;

        self.codec
            .decode(&bytes)
            .map_err(|source| LedgerError::Corrupted {
                key: id.to_owned(),
                source,
            })
    }

    /// Replaces the whole stored value with a record built from the
    /// arguments. Nothing is merged from the previous value.
    pub fn update_asset(
        &self,
        ctx: &Context,
        id: &str,
        event_id: &str,
        hash_context: &str,
        path: &str,
        create_date: &str,
    ) -> Result<AssetRecord> {
        let mut state = ctx.state.write();

        if !has_live_value(&*state, id)? {
            warn!(target: "asset", "asset {} does not exist", id);
            return Err(LedgerError::NotFound { id: id.to_owned() });
        }

        let record = AssetRecord::new(id, event_id, hash_context, path, create_date);
        let bytes = self.codec.encode(&record)?;
        state.put(id, bytes)?;

        Ok(record)
    }

    /// Destructive and final; the key may be recreated afterwards.
    pub fn delete_asset(&self, ctx: &Context, id: &str) -> Result<()> {
        let mut state = ctx.state.write();

        if !has_live_value(&*state, id)? {
            warn!(target: "asset", "asset {} does not exist", id);
            return Err(LedgerError::NotFound { id: id.to_owned() });
        }

        state.delete(id)?;
        Ok(())
    }

    pub fn asset_exists(&self, ctx: &Context, id: &str) -> Result<bool> {
        let state = ctx.state.read();
        has_live_value(&*state, id)
    }

    /// The one genuine partial update: `id`, `eventId` and `createDate` are
    /// carried over from the stored record, `hashContext` and `path` are
    /// replaced.
    pub fn transfer_asset(
        &self,
        ctx: &Context,
        id: &str,
        new_hash_context: &str,
        new_path: &str,
    ) -> Result<AssetRecord> {
        let mut state = ctx.state.write();
        let bytes = live_value(&*state, id)?;

        let current: AssetRecord =
            self.codec
                .decode(&bytes)
                .map_err(|source| LedgerError::Corrupted {
                    key: id.to_owned(),
                    source,
                })?;

        let record = AssetRecord::new(
            current.id,
            current.event_id,
            new_hash_context,
            new_path,
            current.create_date,
        );
        let bytes = self.codec.encode(&record)?;
        state.put(id, bytes)?;

        Ok(record)
    }

    /// Materializes the full scan in ascending lexical key order. A value
    /// that fails to decode aborts the whole listing.
    pub fn list_all_assets(&self, ctx: &Context) -> Result<Vec<AssetRecord>> {
        let state = ctx.state.read();

        let mut records = Vec::new();
        for (key, value) in state.scan_all()? {
            let record: AssetRecord =
                self.codec
                    .decode(&value)
                    .map_err(|source| LedgerError::Corrupted { key, source })?;
            records.push(record);
        }

        Ok(records)
    }
}
