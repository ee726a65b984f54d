fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server stubs are generated too so tests can stand up an in-process MusicService
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/music.proto"], &["proto"])?;
    Ok(())
}
