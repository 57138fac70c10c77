#![deny(warnings)]
#![allow(missing_docs)]

mod impls;
mod types;


use ap_core::{expect_args, AppModule, Context, RegistryBuilder};
use ap_storage::{JsonCodec, RecordCodec};

pub use types::AssetRecord;

pub const MODULE_NAME: &str = "asset";

/// The asset ledger service.
///
/// Holds nothing but the explicitly passed serialization strategy; all record
/// state lives behind the context's store, so one instance serves any number
/// of invocations.
#[derive(Clone)]
pub struct App<C> {
    codec: C,
}

impl Default for App<JsonCodec> {
    fn default() -> Self {
        App { codec: JsonCodec }
    }
}

impl<C: RecordCodec> App<C> {
    pub fn new(codec: C) -> Self {
        App { codec }
    }
}

impl<C> AppModule for App<C>
where
    C: RecordCodec + Clone + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn register_invocations(&self, builder: RegistryBuilder) -> RegistryBuilder {
        let init = self.clone();
        let create = self.clone();
        let read = self.clone();
        let update = self.clone();
        let delete = self.clone();
        let exists = self.clone();
        let transfer = self.clone();
        let list = self.clone();

        builder
            .register(
                "InitLedger",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("InitLedger", args, 0)?;
                    init.init_ledger(ctx)?;
                    Ok(Vec::new())
                }),
            )
            .register(
                "CreateAsset",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("CreateAsset", args, 5)?;
                    let record = create.create_asset(
                        ctx, &args[0], &args[1], &args[2], &args[3], &args[4],
                    )?;
                    Ok(create.codec.encode(&record)?)
                }),
            )
            .register(
                "ReadAsset",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("ReadAsset", args, 1)?;
                    let record = read.read_asset(ctx, &args[0])?;
                    Ok(read.codec.encode(&record)?)
                }),
            )
            .register(
                "UpdateAsset",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("UpdateAsset", args, 5)?;
                    let record = update.update_asset(
                        ctx, &args[0], &args[1], &args[2], &args[3], &args[4],
                    )?;
                    Ok(update.codec.encode(&record)?)
                }),
            )
            .register(
                "DeleteAsset",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("DeleteAsset", args, 1)?;
                    delete.delete_asset(ctx, &args[0])?;
                    Ok(Vec::new())
                }),
            )
            .register(
                "AssetExists",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("AssetExists", args, 1)?;
                    let found = exists.asset_exists(ctx, &args[0])?;
                    Ok(exists.codec.encode(&found)?)
                }),
            )
            .register(
                "TransferAsset",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("TransferAsset", args, 3)?;
                    let record = transfer.transfer_asset(ctx, &args[0], &args[1], &args[2])?;
                    Ok(transfer.codec.encode(&record)?)
                }),
            )
            .register(
                "ListAllAssets",
                Box::new(move |ctx: &Context, args: &[String]| {
                    expect_args("ListAllAssets", args, 0)?;
                    let records = list.list_all_assets(ctx)?;
                    Ok(list.codec.encode(&records)?)
                }),
            )
    }
}
