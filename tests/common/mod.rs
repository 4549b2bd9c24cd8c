//! In-memory package builder for integration tests

#![allow(dead_code)]

use unreal_umx::raw::{FILE_IDENTIFIER, Layout, NameLength, write_compact_index};

pub struct Export {
    pub class: i32,
    pub name: i32,
    pub payload: Vec<u8>,
}

pub struct PackageBuilder {
    version: u16,
    names: Vec<String>,
    /// (class package, class name, object name)
    imports: Vec<(i32, i32, i32)>,
    exports: Vec<Export>,
}

impl PackageBuilder {
    pub fn new(version: u16) -> Self {
        Self {
            version,
            names: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn import(mut self, class_package: i32, class_name: i32, object_name: i32) -> Self {
        self.imports.push((class_package, class_name, object_name));
        self
    }

    pub fn export(mut self, class: i32, name: i32, payload: &[u8]) -> Self {
        self.exports.push(Export {
            class,
            name,
            payload: payload.to_vec(),
        });
        self
    }

    /// Layout: header, payloads, names, imports, exports
    pub fn build(&self) -> Vec<u8> {
        let layout = Layout::for_version(self.version);

        let mut payloads = Vec::new();
        let mut extents = Vec::new();
        for export in &self.exports {
            let offset = if export.payload.is_empty() {
                0
            } else {
                36 + payloads.len() as i32
            };
            extents.push((offset, export.payload.len() as i32));
            payloads.extend_from_slice(&export.payload);
        }

        let mut names = Vec::new();
        for name in &self.names {
            let len = name.len() as i32 + 1;
            match layout.name_length {
                NameLength::Compact => {
                    write_compact_index(&mut names, len).unwrap();
                }
                NameLength::Fixed32 => names.extend_from_slice(&len.to_le_bytes()),
            }
            names.extend_from_slice(name.as_bytes());
            names.push(0);
            if layout.name_flags {
                names.extend_from_slice(&0x0007_0010u32.to_le_bytes());
            }
        }

        let mut imports = Vec::new();
        for &(class_package, class_name, object_name) in &self.imports {
            write_compact_index(&mut imports, class_package).unwrap();
            write_compact_index(&mut imports, class_name).unwrap();
            if layout.package_ref {
                imports.extend_from_slice(&0u32.to_le_bytes());
            }
            write_compact_index(&mut imports, object_name).unwrap();
        }

        let mut exports = Vec::new();
        for (export, &(offset, size)) in self.exports.iter().zip(&extents) {
            write_compact_index(&mut exports, export.class).unwrap();
            write_compact_index(&mut exports, 0).unwrap();
            if layout.package_ref {
                exports.extend_from_slice(&0u32.to_le_bytes());
            }
            write_compact_index(&mut exports, export.name).unwrap();
            exports.extend_from_slice(&0x0007_0004u32.to_le_bytes());
            write_compact_index(&mut exports, size).unwrap();
            if size != 0 {
                write_compact_index(&mut exports, offset).unwrap();
            }
        }

        let name_offset = 36 + payloads.len() as u32;
        let import_offset = name_offset + names.len() as u32;
        let export_offset = import_offset + imports.len() as u32;

        let mut data = Vec::new();
        data.extend_from_slice(&FILE_IDENTIFIER.to_le_bytes());
        data.extend_from_slice(&self.version.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        for value in [
            1u32,
            self.names.len() as u32,
            name_offset,
            self.exports.len() as u32,
            export_offset,
            self.imports.len() as u32,
            import_offset,
        ] {
            data.extend_from_slice(&value.to_le_bytes());
        }

        data.extend(payloads);
        data.extend(names);
        data.extend(imports);
        data.extend(exports);
        data
    }
}

/// A small Unreal Tournament style music package
///
/// Names: None, Core, Engine, Class, Package, Music, Song01, Ambient
/// Imports: Core.Package Engine, Core.Class Music
/// Exports: Song01 (Music), Ambient (Music)
pub fn music_package() -> Vec<u8> {
    PackageBuilder::new(69)
        .name("None")
        .name("Core")
        .name("Engine")
        .name("Class")
        .name("Package")
        .name("Music")
        .name("Song01")
        .name("Ambient")
        .import(1, 4, 2)
        .import(1, 3, 5)
        .export(-2, 6, b"Extended Module: Song01")
        .export(-2, 7, b"IMPM ambient")
        .build()
}
