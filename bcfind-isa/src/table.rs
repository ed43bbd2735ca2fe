use crate::categories::Categories;
use crate::opcode::Opcode;
use crate::shape::OperandShape;

/// Number of defined opcodes. The table is contiguous over `0x00..=0xc9`.
pub const OPCODE_COUNT: usize = 202;

/// Static metadata for one opcode: mnemonic, operand shape, categories.
#[derive(Debug)]
pub struct OpcodeInfo {
    opcode: Opcode,
    mnemonic: &'static str,
    shape: OperandShape,
    categories: Categories,
}

impl OpcodeInfo {
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Canonical lowercase mnemonic, unique across the table.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    pub fn shape(&self) -> OperandShape {
        self.shape
    }

    pub fn categories(&self) -> Categories {
        self.categories
    }

    /// True if this opcode is a member of every category in `cats`.
    pub fn is(&self, cats: Categories) -> bool {
        self.categories.contains(cats)
    }
}

/// Metadata for a raw opcode value, or `None` for reserved/illegal bytes.
pub fn lookup(raw: u8) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE.get(raw as usize)
}

/// Case-insensitive mnemonic lookup.
pub fn by_name(name: &str) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE
        .iter()
        .find(|info| info.mnemonic.eq_ignore_ascii_case(name))
}

/// The full metadata table, in opcode order.
pub fn opcode_table() -> &'static [OpcodeInfo] {
    &OPCODE_TABLE
}

macro_rules! opcodes {
    ($($raw:literal $konst:ident $mn:literal $shape:ident [$($cat:ident),*];)*) => {
        impl Opcode {
            $(pub const $konst: Opcode = Opcode($raw);)*
        }

        static OPCODE_TABLE: [OpcodeInfo; OPCODE_COUNT] = [
            $(OpcodeInfo {
                opcode: Opcode($raw),
                mnemonic: $mn,
                shape: OperandShape::$shape,
                categories: Categories::from_bits_retain(0 $(| Categories::$cat.bits())*),
            },)*
        ];
    };
}

opcodes! {
    0x00 NOP            "nop"             None           [];
    0x01 ACONST_NULL    "aconst_null"     None           [PUSH, TYPED, STACK_PRODUCER];
    0x02 ICONST_M1      "iconst_m1"       None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x03 ICONST_0       "iconst_0"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x04 ICONST_1       "iconst_1"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x05 ICONST_2       "iconst_2"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x06 ICONST_3       "iconst_3"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x07 ICONST_4       "iconst_4"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x08 ICONST_5       "iconst_5"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x09 LCONST_0       "lconst_0"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0a LCONST_1       "lconst_1"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0b FCONST_0       "fconst_0"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0c FCONST_1       "fconst_1"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0d FCONST_2       "fconst_2"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0e DCONST_0       "dconst_0"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x0f DCONST_1       "dconst_1"        None           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x10 BIPUSH         "bipush"          Imm8           [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x11 SIPUSH         "sipush"          Imm16          [CONSTANT_PUSH, PUSH, TYPED, STACK_PRODUCER];
    0x12 LDC            "ldc"             CpIndex8       [CP, INDEXED, PUSH, TYPED, STACK_PRODUCER, EXCEPTION_THROWER];
    0x13 LDC_W          "ldc_w"           CpIndex16      [CP, INDEXED, PUSH, TYPED, STACK_PRODUCER, EXCEPTION_THROWER];
    0x14 LDC2_W         "ldc2_w"          CpIndex16      [CP, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x15 ILOAD          "iload"           Local          [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x16 LLOAD          "lload"           Local          [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x17 FLOAD          "fload"           Local          [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x18 DLOAD          "dload"           Local          [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x19 ALOAD          "aload"           Local          [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1a ILOAD_0        "iload_0"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1b ILOAD_1        "iload_1"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1c ILOAD_2        "iload_2"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1d ILOAD_3        "iload_3"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1e LLOAD_0        "lload_0"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x1f LLOAD_1        "lload_1"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x20 LLOAD_2        "lload_2"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x21 LLOAD_3        "lload_3"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x22 FLOAD_0        "fload_0"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x23 FLOAD_1        "fload_1"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x24 FLOAD_2        "fload_2"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x25 FLOAD_3        "fload_3"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x26 DLOAD_0        "dload_0"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x27 DLOAD_1        "dload_1"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x28 DLOAD_2        "dload_2"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x29 DLOAD_3        "dload_3"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x2a ALOAD_0        "aload_0"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x2b ALOAD_1        "aload_1"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x2c ALOAD_2        "aload_2"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x2d ALOAD_3        "aload_3"         None           [LOAD, INDEXED, PUSH, TYPED, STACK_PRODUCER];
    0x2e IALOAD         "iaload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x2f LALOAD         "laload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x30 FALOAD         "faload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x31 DALOAD         "daload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x32 AALOAD         "aaload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x33 BALOAD         "baload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x34 CALOAD         "caload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x35 SALOAD         "saload"          None           [TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x36 ISTORE         "istore"          Local          [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x37 LSTORE         "lstore"          Local          [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x38 FSTORE         "fstore"          Local          [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x39 DSTORE         "dstore"          Local          [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3a ASTORE         "astore"          Local          [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3b ISTORE_0       "istore_0"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3c ISTORE_1       "istore_1"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3d ISTORE_2       "istore_2"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3e ISTORE_3       "istore_3"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x3f LSTORE_0       "lstore_0"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x40 LSTORE_1       "lstore_1"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x41 LSTORE_2       "lstore_2"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x42 LSTORE_3       "lstore_3"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x43 FSTORE_0       "fstore_0"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x44 FSTORE_1       "fstore_1"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x45 FSTORE_2       "fstore_2"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x46 FSTORE_3       "fstore_3"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x47 DSTORE_0       "dstore_0"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x48 DSTORE_1       "dstore_1"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x49 DSTORE_2       "dstore_2"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4a DSTORE_3       "dstore_3"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4b ASTORE_0       "astore_0"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4c ASTORE_1       "astore_1"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4d ASTORE_2       "astore_2"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4e ASTORE_3       "astore_3"        None           [STORE, INDEXED, POP, TYPED, STACK_CONSUMER];
    0x4f IASTORE        "iastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x50 LASTORE        "lastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x51 FASTORE        "fastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x52 DASTORE        "dastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x53 AASTORE        "aastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x54 BASTORE        "bastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x55 CASTORE        "castore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x56 SASTORE        "sastore"         None           [TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0x57 POP            "pop"             None           [STACK, POP, STACK_CONSUMER];
    0x58 POP2           "pop2"            None           [STACK, POP, STACK_CONSUMER];
    0x59 DUP            "dup"             None           [STACK, PUSH, STACK_PRODUCER];
    0x5a DUP_X1         "dup_x1"          None           [STACK, PUSH, STACK_PRODUCER];
    0x5b DUP_X2         "dup_x2"          None           [STACK, PUSH, STACK_PRODUCER];
    0x5c DUP2           "dup2"            None           [STACK, PUSH, STACK_PRODUCER];
    0x5d DUP2_X1        "dup2_x1"         None           [STACK, PUSH, STACK_PRODUCER];
    0x5e DUP2_X2        "dup2_x2"         None           [STACK, PUSH, STACK_PRODUCER];
    0x5f SWAP           "swap"            None           [STACK, STACK_PRODUCER, STACK_CONSUMER];
    0x60 IADD           "iadd"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x61 LADD           "ladd"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x62 FADD           "fadd"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x63 DADD           "dadd"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x64 ISUB           "isub"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x65 LSUB           "lsub"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x66 FSUB           "fsub"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x67 DSUB           "dsub"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x68 IMUL           "imul"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x69 LMUL           "lmul"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x6a FMUL           "fmul"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x6b DMUL           "dmul"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x6c IDIV           "idiv"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x6d LDIV           "ldiv"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x6e FDIV           "fdiv"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x6f DDIV           "ddiv"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x70 IREM           "irem"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x71 LREM           "lrem"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0x72 FREM           "frem"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x73 DREM           "drem"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x74 INEG           "ineg"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x75 LNEG           "lneg"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x76 FNEG           "fneg"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x77 DNEG           "dneg"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x78 ISHL           "ishl"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x79 LSHL           "lshl"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7a ISHR           "ishr"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7b LSHR           "lshr"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7c IUSHR          "iushr"           None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7d LUSHR          "lushr"           None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7e IAND           "iand"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x7f LAND           "land"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x80 IOR            "ior"             None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x81 LOR            "lor"             None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x82 IXOR           "ixor"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x83 LXOR           "lxor"            None           [ARITHMETIC, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x84 IINC           "iinc"            LocalConst     [INDEXED, TYPED];
    0x85 I2L            "i2l"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x86 I2F            "i2f"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x87 I2D            "i2d"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x88 L2I            "l2i"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x89 L2F            "l2f"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8a L2D            "l2d"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8b F2I            "f2i"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8c F2L            "f2l"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8d F2D            "f2d"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8e D2I            "d2i"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x8f D2L            "d2l"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x90 D2F            "d2f"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x91 I2B            "i2b"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x92 I2C            "i2c"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x93 I2S            "i2s"             None           [CONVERSION, TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x94 LCMP           "lcmp"            None           [TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x95 FCMPL          "fcmpl"           None           [TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x96 FCMPG          "fcmpg"           None           [TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x97 DCMPL          "dcmpl"           None           [TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x98 DCMPG          "dcmpg"           None           [TYPED, STACK_PRODUCER, STACK_CONSUMER];
    0x99 IFEQ           "ifeq"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9a IFNE           "ifne"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9b IFLT           "iflt"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9c IFGE           "ifge"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9d IFGT           "ifgt"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9e IFLE           "ifle"            Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0x9f IF_ICMPEQ      "if_icmpeq"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa0 IF_ICMPNE      "if_icmpne"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa1 IF_ICMPLT      "if_icmplt"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa2 IF_ICMPGE      "if_icmpge"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa3 IF_ICMPGT      "if_icmpgt"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa4 IF_ICMPLE      "if_icmple"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa5 IF_ACMPEQ      "if_acmpeq"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa6 IF_ACMPNE      "if_acmpne"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xa7 GOTO           "goto"            Branch16       [BRANCH, UNCONDITIONAL, TARGETER];
    0xa8 JSR            "jsr"             Branch16       [BRANCH, JSR, UNCONDITIONAL, TARGETER, STACK_PRODUCER];
    0xa9 RET            "ret"             Local          [INDEXED];
    0xaa TABLESWITCH    "tableswitch"     TableSwitch    [BRANCH, SELECT, VARIABLE_LENGTH, TARGETER, STACK_CONSUMER];
    0xab LOOKUPSWITCH   "lookupswitch"    LookupSwitch   [BRANCH, SELECT, VARIABLE_LENGTH, TARGETER, STACK_CONSUMER];
    0xac IRETURN        "ireturn"         None           [RETURN, TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0xad LRETURN        "lreturn"         None           [RETURN, TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0xae FRETURN        "freturn"         None           [RETURN, TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0xaf DRETURN        "dreturn"         None           [RETURN, TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0xb0 ARETURN        "areturn"         None           [RETURN, TYPED, STACK_CONSUMER, EXCEPTION_THROWER];
    0xb1 RETURN         "return"          None           [RETURN, TYPED, EXCEPTION_THROWER];
    0xb2 GETSTATIC      "getstatic"       CpIndex16      [FIELD, CP, INDEXED, TYPED, PUSH, STACK_PRODUCER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb3 PUTSTATIC      "putstatic"       CpIndex16      [FIELD, CP, INDEXED, TYPED, POP, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb4 GETFIELD       "getfield"        CpIndex16      [FIELD, CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb5 PUTFIELD       "putfield"        CpIndex16      [FIELD, CP, INDEXED, TYPED, POP, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb6 INVOKEVIRTUAL  "invokevirtual"   CpIndex16      [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb7 INVOKESPECIAL  "invokespecial"   CpIndex16      [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb8 INVOKESTATIC   "invokestatic"    CpIndex16      [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xb9 INVOKEINTERFACE "invokeinterface" CpIndex16Count [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xba INVOKEDYNAMIC  "invokedynamic"   CpIndex16Zero2 [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xbb NEW            "new"             CpIndex16      [CP, INDEXED, TYPED, ALLOCATION, STACK_PRODUCER, LOAD_CLASS, EXCEPTION_THROWER];
    0xbc NEWARRAY       "newarray"        Imm8           [ALLOCATION, TYPED, STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0xbd ANEWARRAY      "anewarray"       CpIndex16      [CP, INDEXED, TYPED, ALLOCATION, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xbe ARRAYLENGTH    "arraylength"     None           [STACK_PRODUCER, STACK_CONSUMER, EXCEPTION_THROWER];
    0xbf ATHROW         "athrow"          None           [STACK_CONSUMER, EXCEPTION_THROWER];
    0xc0 CHECKCAST      "checkcast"       CpIndex16      [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xc1 INSTANCEOF     "instanceof"      CpIndex16      [CP, INDEXED, TYPED, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xc2 MONITORENTER   "monitorenter"    None           [STACK_CONSUMER, EXCEPTION_THROWER];
    0xc3 MONITOREXIT    "monitorexit"     None           [STACK_CONSUMER, EXCEPTION_THROWER];
    0xc4 WIDE           "wide"            Wide           [];
    0xc5 MULTIANEWARRAY "multianewarray"  CpIndex16Dims  [CP, INDEXED, TYPED, ALLOCATION, STACK_PRODUCER, STACK_CONSUMER, LOAD_CLASS, EXCEPTION_THROWER];
    0xc6 IFNULL         "ifnull"          Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xc7 IFNONNULL      "ifnonnull"       Branch16       [BRANCH, IF, TARGETER, STACK_CONSUMER];
    0xc8 GOTO_W         "goto_w"          Branch32       [BRANCH, UNCONDITIONAL, TARGETER];
    0xc9 JSR_W          "jsr_w"           Branch32       [BRANCH, JSR, UNCONDITIONAL, TARGETER, STACK_PRODUCER];
}
