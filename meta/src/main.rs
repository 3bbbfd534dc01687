fn main() {
    multiversx_sc_meta_lib::cli_main::<circle_trust::AbiProvider>();
}
