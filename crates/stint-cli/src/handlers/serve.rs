use anyhow::{Context, Result};
use std::path::PathBuf;
use stint_serve::StaticServer;

/// Serve an asset directory until Ctrl-C.
pub fn handle(root: PathBuf, port: u16) -> Result<()> {
    anyhow::ensure!(
        root.is_dir(),
        "Asset directory does not exist: {}",
        root.display()
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    rt.block_on(async move {
        let server = StaticServer::bind(root.clone(), port).await?;
        println!(
            "Serving {} at http://{}",
            root.display(),
            server.local_addr()
        );
        println!("Press Ctrl+C to stop");

        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl+C")?;
        server.shutdown().await;
        Ok(())
    })
}
