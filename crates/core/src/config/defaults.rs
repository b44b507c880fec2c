//! Default values and functions for configuration

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ccflags.toml";

/// Environment variable prefix for configuration overrides
pub(crate) const ENV_PREFIX: &str = "CCFLAGS";

/// Built-in static flag table
///
/// Used when no compilation database is configured. Relative include paths
/// are resolved against the directory holding the configuration file.
/// Duplicated directories are kept as generated; the compiler ignores them.
pub(crate) fn default_static_flags() -> Vec<String> {
    [
        // Language selection and standard
        "-x",
        "c++",
        "-std=c++11",
        // Preprocessor defines
        "-DVPMU_CONFIG",
        "-DVPMU_CONFIG_SET",
        "-DVPMU_CONFIG_DEBUG",
        // Project include directories
        "-I.",
        "-I./audio",
        "-I./backends",
        "-I./block",
        "-I./crypto",
        "-I./disas",
        "-I./fsdev",
        "-I./hw/9pfs",
        "-I./hw/acpi",
        "-I./hw/audio",
        "-I./hw/block",
        "-I./hw/bt",
        "-I./hw/char",
        "-I./hw/core",
        "-I./hw/display",
        "-I./hw/dma",
        "-I./hw/gpio",
        "-I./hw/i2c",
        "-I./hw/ide",
        "-I./hw/input",
        "-I./hw/intc",
        "-I./hw/ipack",
        "-I./hw/ipmi",
        "-I./hw/isa",
        "-I./hw/mem",
        "-I./hw/misc",
        "-I./hw/misc/macio",
        "-I./hw/net",
        "-I./hw/net/rocker",
        "-I./hw/nvram",
        "-I./hw/pci",
        "-I./hw/pci-bridge",
        "-I./hw/pci-host",
        "-I./hw/pcmcia",
        "-I./hw/scsi",
        "-I./hw/sd",
        "-I./hw/smbios",
        "-I./hw/ssi",
        "-I./hw/timer",
        "-I./hw/tpm",
        "-I./hw/usb",
        "-I./hw/virtio",
        "-I./hw/watchdog",
        "-I./io",
        "-I./linux-headers",
        "-I./migration",
        "-I./nbd",
        "-I./net",
        "-I./qom",
        "-I./replay",
        "-I./slirp",
        "-I./ui",
        "-I./fpu",
        "-I./hw/9pfs",
        "-I./hw/adc",
        "-I./hw/alpha",
        "-I./hw/arm",
        "-I./hw/block",
        "-I./hw/block/dataplane",
        "-I./hw/char",
        "-I./hw/core",
        "-I./hw/cpu",
        "-I./hw/cris",
        "-I./hw/display",
        "-I./hw/dma",
        "-I./hw/gpio",
        "-I./hw/i2c",
        "-I./hw/i386",
        "-I./hw/i386/kvm",
        "-I./hw/input",
        "-I./hw/intc",
        "-I./hw/isa",
        "-I./hw/lm32",
        "-I./hw/m68k",
        "-I./hw/microblaze",
        "-I./hw/mips",
        "-I./hw/misc",
        "-I./hw/moxie",
        "-I./hw/net",
        "-I./hw/net/fsl_etsec",
        "-I./hw/net/rocker",
        "-I./hw/nvram",
        "-I./hw/openrisc",
        "-I./hw/pcmcia",
        "-I./hw/ppc",
        "-I./hw/s390x",
        "-I./hw/scsi",
        "-I./hw/sd",
        "-I./hw/sh4",
        "-I./hw/sparc",
        "-I./hw/sparc64",
        "-I./hw/ssi",
        "-I./hw/timer",
        "-I./hw/tricore",
        "-I./hw/unicore32",
        "-I./hw/usb",
        "-I./hw/vfio",
        "-I./hw/virtio",
        "-I./hw/xtensa",
        "-I./include",
        "-I./libdecnumber",
        "-I./libdecnumber/dpd",
        "-I./linux-headers",
        "-I./linux-user",
        "-I./linux-user/aarch64",
        "-I./linux-user/alpha",
        "-I./linux-user/arm",
        "-I./linux-user/arm/nwfpe",
        "-I./linux-user/cris",
        "-I./linux-user/host/x86_64",
        "-I./linux-user/i386",
        "-I./linux-user/m68k",
        "-I./linux-user/microblaze",
        "-I./linux-user/mips",
        "-I./linux-user/mips64",
        "-I./linux-user/openrisc",
        "-I./linux-user/ppc",
        "-I./linux-user/s390x",
        "-I./linux-user/sh4",
        "-I./linux-user/sparc",
        "-I./linux-user/sparc64",
        "-I./linux-user/tilegx",
        "-I./linux-user/x86_64",
        "-I./migration",
        "-I./s390x-linux-user",
        "-I./s390x-softmmu",
        "-I./target-alpha",
        "-I./target-arm",
        "-I./target-cris",
        "-I./target-i386",
        "-I./target-lm32",
        "-I./target-m68k",
        "-I./target-microblaze",
        "-I./target-mips",
        "-I./target-moxie",
        "-I./target-openrisc",
        "-I./target-ppc",
        "-I./target-s390x",
        "-I./target-sh4",
        "-I./target-sparc",
        "-I./target-tilegx",
        "-I./target-tricore",
        "-I./target-unicore32",
        "-I./target-xtensa",
        "-I./tcg",
        "-I./tcg/i386",
        "-I./tests",
        "-I./trace",
        "-I./vpmu",
        "-I./vpmu/include",
        "-I./vpmu/libs",
        "-I./vpmu/libs/d4-7",
        "-I./vpmu/simulators",
        "-I./vpmu/stream_impl",
        // System library include directories
        "-I/usr/include/SDL",
        "-I/usr/include/atk-1.0",
        "-I/usr/include/cacard",
        "-I/usr/include/cairo",
        "-I/usr/include/freetype2",
        "-I/usr/include/gdk-pixbuf-2.0",
        "-I/usr/include/glib-2.0",
        "-I/usr/include/gtk-2.0",
        "-I/usr/include/harfbuzz",
        "-I/usr/include/libdrm",
        "-I/usr/include/libpng16",
        "-I/usr/include/libusb-1.0",
        "-I/usr/include/nspr",
        "-I/usr/include/nss",
        "-I/usr/include/p11-kit-1",
        "-I/usr/include/pango-1.0",
        "-I/usr/include/pixman-1",
        "-I/usr/include/virgl",
        "-I/usr/lib/glib-2.0/include",
        "-I/usr/lib/gtk-2.0/include",
        // Build-tree include directories
        "-Iaudio",
        "-Ibackends",
        "-Iblock",
        "-Icontrib/ivshmem-client",
        "-Icontrib/ivshmem-server",
        "-Icrypto",
        "-Idisas",
        "-Ifpu",
        "-Ifsdev",
        "-Ihw/9pfs",
        "-Ihw/acpi",
        "-Ihw/adc",
        "-Ihw/alpha",
        "-Ihw/arm",
        "-Ihw/audio",
        "-Ihw/block",
        "-Ihw/block/dataplane",
        "-Ihw/bt",
        "-Ihw/char",
        "-Ihw/core",
        "-Ihw/cpu",
        "-Ihw/cris",
        "-Ihw/display",
        "-Ihw/dma",
        "-Ihw/gpio",
        "-Ihw/i2c",
        "-Ihw/i386",
        "-Ihw/i386/kvm",
        "-Ihw/ide",
        "-Ihw/input",
        "-Ihw/intc",
        "-Ihw/ipack",
        "-Ihw/ipmi",
        "-Ihw/isa",
        "-Ihw/lm32",
        "-Ihw/m68k",
        "-Ihw/mem",
        "-Ihw/microblaze",
        "-Ihw/mips",
        "-Ihw/misc",
        "-Ihw/misc/macio",
        "-Ihw/moxie",
        "-Ihw/net",
        "-Ihw/net/fsl_etsec",
        "-Ihw/net/rocker",
        "-Ihw/nvram",
        "-Ihw/openrisc",
        "-Ihw/pci",
        "-Ihw/pci-bridge",
        "-Ihw/pci-host",
        "-Ihw/pcmcia",
        "-Ihw/ppc",
        "-Ihw/s390x",
        "-Ihw/scsi",
        "-Ihw/sd",
        "-Ihw/sh4",
        "-Ihw/smbios",
        "-Ihw/sparc",
        "-Ihw/sparc64",
        "-Ihw/ssi",
        "-Ihw/timer",
        "-Ihw/tpm",
        "-Ihw/tricore",
        "-Ihw/unicore32",
        "-Ihw/usb",
        "-Ihw/vfio",
        "-Ihw/virtio",
        "-Ihw/watchdog",
        "-Ihw/xtensa",
        "-Iio",
        "-Ilibdecnumber",
        "-Ilibdecnumber/dpd",
        "-Ilinux-user",
        "-Ilinux-user/arm/nwfpe",
        "-Imigration",
        "-Inbd",
        "-Inet",
        "-Iqapi",
        "-Iqga",
        "-Iqga/qapi-generated",
        "-Iqobject",
        "-Iqom",
        "-Ireplay",
        "-Islirp",
        "-Istubs",
        "-Itarget-alpha",
        "-Itcg",
        "-Itests/qemu-iotests",
        "-Itrace",
        "-Iui",
        "-Iutil",
        // Warnings and architecture
        "-Wall",
        "-m64",
        // Generated QAPI headers
        "-I",
        "qga/qapi-generated",
    ]
    .iter()
    .map(|flag| flag.to_string())
    .collect()
}
