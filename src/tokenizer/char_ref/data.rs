// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The named character reference table and the C1 control replacement table
//! used by numeric character references in the 0x80-0x9F range.
//!
//! `NAMED_ENTITIES` maps every prefix of every WHATWG named character
//! reference (without the leading `&`, with or without its trailing `;`
//! where the spec allows both) to `(codepoint1, codepoint2)`, where
//! `codepoint2` is `0` for single-character references. An entry whose
//! value is `(0, 0)` is a *prefix-only* match: a valid continuation exists,
//! but this exact string is not itself a complete reference (e.g. `"noti"`
//! is a live prefix of `notin;` but matches nothing on its own). The
//! tokenizer's `do_named` state looks up the accumulated buffer after each
//! character, so every prefix has to resolve to something for matching to
//! proceed one character at a time. This is the complete table: all 2,231
//! named references from <https://html.spec.whatwg.org/entities.json>.

pub(super) static NAMED_ENTITIES: phf::Map<&'static str, (u32, u32)> = phf::phf_map! {
    "A" => (0x0000, 0x0000),
    "AE" => (0x0000, 0x0000),
    "AEl" => (0x0000, 0x0000),
    "AEli" => (0x0000, 0x0000),
    "AElig" => (0x00C6, 0x0000),
    "AElig;" => (0x00C6, 0x0000),
    "AM" => (0x0000, 0x0000),
    "AMP" => (0x0026, 0x0000),
    "AMP;" => (0x0026, 0x0000),
    "Aa" => (0x0000, 0x0000),
    "Aac" => (0x0000, 0x0000),
    "Aacu" => (0x0000, 0x0000),
    "Aacut" => (0x0000, 0x0000),
    "Aacute" => (0x00C1, 0x0000),
    "Aacute;" => (0x00C1, 0x0000),
    "Ab" => (0x0000, 0x0000),
    "Abr" => (0x0000, 0x0000),
    "Abre" => (0x0000, 0x0000),
    "Abrev" => (0x0000, 0x0000),
    "Abreve" => (0x0000, 0x0000),
    "Abreve;" => (0x0102, 0x0000),
    "Ac" => (0x0000, 0x0000),
    "Aci" => (0x0000, 0x0000),
    "Acir" => (0x0000, 0x0000),
    "Acirc" => (0x00C2, 0x0000),
    "Acirc;" => (0x00C2, 0x0000),
    "Acy" => (0x0000, 0x0000),
    "Acy;" => (0x0410, 0x0000),
    "Af" => (0x0000, 0x0000),
    "Afr" => (0x0000, 0x0000),
    "Afr;" => (0x1D504, 0x0000),
    "Ag" => (0x0000, 0x0000),
    "Agr" => (0x0000, 0x0000),
    "Agra" => (0x0000, 0x0000),
    "Agrav" => (0x0000, 0x0000),
    "Agrave" => (0x00C0, 0x0000),
    "Agrave;" => (0x00C0, 0x0000),
    "Al" => (0x0000, 0x0000),
    "Alp" => (0x0000, 0x0000),
    "Alph" => (0x0000, 0x0000),
    "Alpha" => (0x0000, 0x0000),
    "Alpha;" => (0x0391, 0x0000),
    "Am" => (0x0000, 0x0000),
    "Ama" => (0x0000, 0x0000),
    "Amac" => (0x0000, 0x0000),
    "Amacr" => (0x0000, 0x0000),
    "Amacr;" => (0x0100, 0x0000),
    "An" => (0x0000, 0x0000),
    "And" => (0x0000, 0x0000),
    "And;" => (0x2A53, 0x0000),
    "Ao" => (0x0000, 0x0000),
    "Aog" => (0x0000, 0x0000),
    "Aogo" => (0x0000, 0x0000),
    "Aogon" => (0x0000, 0x0000),
    "Aogon;" => (0x0104, 0x0000),
    "Aop" => (0x0000, 0x0000),
    "Aopf" => (0x0000, 0x0000),
    "Aopf;" => (0x1D538, 0x0000),
    "Ap" => (0x0000, 0x0000),
    "App" => (0x0000, 0x0000),
    "Appl" => (0x0000, 0x0000),
    "Apply" => (0x0000, 0x0000),
    "ApplyF" => (0x0000, 0x0000),
    "ApplyFu" => (0x0000, 0x0000),
    "ApplyFun" => (0x0000, 0x0000),
    "ApplyFunc" => (0x0000, 0x0000),
    "ApplyFunct" => (0x0000, 0x0000),
    "ApplyFuncti" => (0x0000, 0x0000),
    "ApplyFunctio" => (0x0000, 0x0000),
    "ApplyFunction" => (0x0000, 0x0000),
    "ApplyFunction;" => (0x2061, 0x0000),
    "Ar" => (0x0000, 0x0000),
    "Ari" => (0x0000, 0x0000),
    "Arin" => (0x0000, 0x0000),
    "Aring" => (0x00C5, 0x0000),
    "Aring;" => (0x00C5, 0x0000),
    "As" => (0x0000, 0x0000),
    "Asc" => (0x0000, 0x0000),
    "Ascr" => (0x0000, 0x0000),
    "Ascr;" => (0x1D49C, 0x0000),
    "Ass" => (0x0000, 0x0000),
    "Assi" => (0x0000, 0x0000),
    "Assig" => (0x0000, 0x0000),
    "Assign" => (0x0000, 0x0000),
    "Assign;" => (0x2254, 0x0000),
    "At" => (0x0000, 0x0000),
    "Ati" => (0x0000, 0x0000),
    "Atil" => (0x0000, 0x0000),
    "Atild" => (0x0000, 0x0000),
    "Atilde" => (0x00C3, 0x0000),
    "Atilde;" => (0x00C3, 0x0000),
    "Au" => (0x0000, 0x0000),
    "Aum" => (0x0000, 0x0000),
    "Auml" => (0x00C4, 0x0000),
    "Auml;" => (0x00C4, 0x0000),
    "B" => (0x0000, 0x0000),
    "Ba" => (0x0000, 0x0000),
    "Bac" => (0x0000, 0x0000),
    "Back" => (0x0000, 0x0000),
    "Backs" => (0x0000, 0x0000),
    "Backsl" => (0x0000, 0x0000),
    "Backsla" => (0x0000, 0x0000),
    "Backslas" => (0x0000, 0x0000),
    "Backslash" => (0x0000, 0x0000),
    "Backslash;" => (0x2216, 0x0000),
    "Bar" => (0x0000, 0x0000),
    "Barv" => (0x0000, 0x0000),
    "Barv;" => (0x2AE7, 0x0000),
    "Barw" => (0x0000, 0x0000),
    "Barwe" => (0x0000, 0x0000),
    "Barwed" => (0x0000, 0x0000),
    "Barwed;" => (0x2306, 0x0000),
    "Bc" => (0x0000, 0x0000),
    "Bcy" => (0x0000, 0x0000),
    "Bcy;" => (0x0411, 0x0000),
    "Be" => (0x0000, 0x0000),
    "Bec" => (0x0000, 0x0000),
    "Beca" => (0x0000, 0x0000),
    "Becau" => (0x0000, 0x0000),
    "Becaus" => (0x0000, 0x0000),
    "Because" => (0x0000, 0x0000),
    "Because;" => (0x2235, 0x0000),
    "Ber" => (0x0000, 0x0000),
    "Bern" => (0x0000, 0x0000),
    "Berno" => (0x0000, 0x0000),
    "Bernou" => (0x0000, 0x0000),
    "Bernoul" => (0x0000, 0x0000),
    "Bernoull" => (0x0000, 0x0000),
    "Bernoulli" => (0x0000, 0x0000),
    "Bernoullis" => (0x0000, 0x0000),
    "Bernoullis;" => (0x212C, 0x0000),
    "Bet" => (0x0000, 0x0000),
    "Beta" => (0x0000, 0x0000),
    "Beta;" => (0x0392, 0x0000),
    "Bf" => (0x0000, 0x0000),
    "Bfr" => (0x0000, 0x0000),
    "Bfr;" => (0x1D505, 0x0000),
    "Bo" => (0x0000, 0x0000),
    "Bop" => (0x0000, 0x0000),
    "Bopf" => (0x0000, 0x0000),
    "Bopf;" => (0x1D539, 0x0000),
    "Br" => (0x0000, 0x0000),
    "Bre" => (0x0000, 0x0000),
    "Brev" => (0x0000, 0x0000),
    "Breve" => (0x0000, 0x0000),
    "Breve;" => (0x02D8, 0x0000),
    "Bs" => (0x0000, 0x0000),
    "Bsc" => (0x0000, 0x0000),
    "Bscr" => (0x0000, 0x0000),
    "Bscr;" => (0x212C, 0x0000),
    "Bu" => (0x0000, 0x0000),
    "Bum" => (0x0000, 0x0000),
    "Bump" => (0x0000, 0x0000),
    "Bumpe" => (0x0000, 0x0000),
    "Bumpeq" => (0x0000, 0x0000),
    "Bumpeq;" => (0x224E, 0x0000),
    "C" => (0x0000, 0x0000),
    "CH" => (0x0000, 0x0000),
    "CHc" => (0x0000, 0x0000),
    "CHcy" => (0x0000, 0x0000),
    "CHcy;" => (0x0427, 0x0000),
    "CO" => (0x0000, 0x0000),
    "COP" => (0x0000, 0x0000),
    "COPY" => (0x00A9, 0x0000),
    "COPY;" => (0x00A9, 0x0000),
    "Ca" => (0x0000, 0x0000),
    "Cac" => (0x0000, 0x0000),
    "Cacu" => (0x0000, 0x0000),
    "Cacut" => (0x0000, 0x0000),
    "Cacute" => (0x0000, 0x0000),
    "Cacute;" => (0x0106, 0x0000),
    "Cap" => (0x0000, 0x0000),
    "Cap;" => (0x22D2, 0x0000),
    "Capi" => (0x0000, 0x0000),
    "Capit" => (0x0000, 0x0000),
    "Capita" => (0x0000, 0x0000),
    "Capital" => (0x0000, 0x0000),
    "CapitalD" => (0x0000, 0x0000),
    "CapitalDi" => (0x0000, 0x0000),
    "CapitalDif" => (0x0000, 0x0000),
    "CapitalDiff" => (0x0000, 0x0000),
    "CapitalDiffe" => (0x0000, 0x0000),
    "CapitalDiffer" => (0x0000, 0x0000),
    "CapitalDiffere" => (0x0000, 0x0000),
    "CapitalDifferen" => (0x0000, 0x0000),
    "CapitalDifferent" => (0x0000, 0x0000),
    "CapitalDifferenti" => (0x0000, 0x0000),
    "CapitalDifferentia" => (0x0000, 0x0000),
    "CapitalDifferential" => (0x0000, 0x0000),
    "CapitalDifferentialD" => (0x0000, 0x0000),
    "CapitalDifferentialD;" => (0x2145, 0x0000),
    "Cay" => (0x0000, 0x0000),
    "Cayl" => (0x0000, 0x0000),
    "Cayle" => (0x0000, 0x0000),
    "Cayley" => (0x0000, 0x0000),
    "Cayleys" => (0x0000, 0x0000),
    "Cayleys;" => (0x212D, 0x0000),
    "Cc" => (0x0000, 0x0000),
    "Cca" => (0x0000, 0x0000),
    "Ccar" => (0x0000, 0x0000),
    "Ccaro" => (0x0000, 0x0000),
    "Ccaron" => (0x0000, 0x0000),
    "Ccaron;" => (0x010C, 0x0000),
    "Cce" => (0x0000, 0x0000),
    "Cced" => (0x0000, 0x0000),
    "Ccedi" => (0x0000, 0x0000),
    "Ccedil" => (0x00C7, 0x0000),
    "Ccedil;" => (0x00C7, 0x0000),
    "Cci" => (0x0000, 0x0000),
    "Ccir" => (0x0000, 0x0000),
    "Ccirc" => (0x0000, 0x0000),
    "Ccirc;" => (0x0108, 0x0000),
    "Cco" => (0x0000, 0x0000),
    "Ccon" => (0x0000, 0x0000),
    "Cconi" => (0x0000, 0x0000),
    "Cconin" => (0x0000, 0x0000),
    "Cconint" => (0x0000, 0x0000),
    "Cconint;" => (0x2230, 0x0000),
    "Cd" => (0x0000, 0x0000),
    "Cdo" => (0x0000, 0x0000),
    "Cdot" => (0x0000, 0x0000),
    "Cdot;" => (0x010A, 0x0000),
    "Ce" => (0x0000, 0x0000),
    "Ced" => (0x0000, 0x0000),
    "Cedi" => (0x0000, 0x0000),
    "Cedil" => (0x0000, 0x0000),
    "Cedill" => (0x0000, 0x0000),
    "Cedilla" => (0x0000, 0x0000),
    "Cedilla;" => (0x00B8, 0x0000),
    "Cen" => (0x0000, 0x0000),
    "Cent" => (0x0000, 0x0000),
    "Cente" => (0x0000, 0x0000),
    "Center" => (0x0000, 0x0000),
    "CenterD" => (0x0000, 0x0000),
    "CenterDo" => (0x0000, 0x0000),
    "CenterDot" => (0x0000, 0x0000),
    "CenterDot;" => (0x00B7, 0x0000),
    "Cf" => (0x0000, 0x0000),
    "Cfr" => (0x0000, 0x0000),
    "Cfr;" => (0x212D, 0x0000),
    "Ch" => (0x0000, 0x0000),
    "Chi" => (0x0000, 0x0000),
    "Chi;" => (0x03A7, 0x0000),
    "Ci" => (0x0000, 0x0000),
    "Cir" => (0x0000, 0x0000),
    "Circ" => (0x0000, 0x0000),
    "Circl" => (0x0000, 0x0000),
    "Circle" => (0x0000, 0x0000),
    "CircleD" => (0x0000, 0x0000),
    "CircleDo" => (0x0000, 0x0000),
    "CircleDot" => (0x0000, 0x0000),
    "CircleDot;" => (0x2299, 0x0000),
    "CircleM" => (0x0000, 0x0000),
    "CircleMi" => (0x0000, 0x0000),
    "CircleMin" => (0x0000, 0x0000),
    "CircleMinu" => (0x0000, 0x0000),
    "CircleMinus" => (0x0000, 0x0000),
    "CircleMinus;" => (0x2296, 0x0000),
    "CircleP" => (0x0000, 0x0000),
    "CirclePl" => (0x0000, 0x0000),
    "CirclePlu" => (0x0000, 0x0000),
    "CirclePlus" => (0x0000, 0x0000),
    "CirclePlus;" => (0x2295, 0x0000),
    "CircleT" => (0x0000, 0x0000),
    "CircleTi" => (0x0000, 0x0000),
    "CircleTim" => (0x0000, 0x0000),
    "CircleTime" => (0x0000, 0x0000),
    "CircleTimes" => (0x0000, 0x0000),
    "CircleTimes;" => (0x2297, 0x0000),
    "Cl" => (0x0000, 0x0000),
    "Clo" => (0x0000, 0x0000),
    "Cloc" => (0x0000, 0x0000),
    "Clock" => (0x0000, 0x0000),
    "Clockw" => (0x0000, 0x0000),
    "Clockwi" => (0x0000, 0x0000),
    "Clockwis" => (0x0000, 0x0000),
    "Clockwise" => (0x0000, 0x0000),
    "ClockwiseC" => (0x0000, 0x0000),
    "ClockwiseCo" => (0x0000, 0x0000),
    "ClockwiseCon" => (0x0000, 0x0000),
    "ClockwiseCont" => (0x0000, 0x0000),
    "ClockwiseConto" => (0x0000, 0x0000),
    "ClockwiseContou" => (0x0000, 0x0000),
    "ClockwiseContour" => (0x0000, 0x0000),
    "ClockwiseContourI" => (0x0000, 0x0000),
    "ClockwiseContourIn" => (0x0000, 0x0000),
    "ClockwiseContourInt" => (0x0000, 0x0000),
    "ClockwiseContourInte" => (0x0000, 0x0000),
    "ClockwiseContourInteg" => (0x0000, 0x0000),
    "ClockwiseContourIntegr" => (0x0000, 0x0000),
    "ClockwiseContourIntegra" => (0x0000, 0x0000),
    "ClockwiseContourIntegral" => (0x0000, 0x0000),
    "ClockwiseContourIntegral;" => (0x2232, 0x0000),
    "Clos" => (0x0000, 0x0000),
    "Close" => (0x0000, 0x0000),
    "CloseC" => (0x0000, 0x0000),
    "CloseCu" => (0x0000, 0x0000),
    "CloseCur" => (0x0000, 0x0000),
    "CloseCurl" => (0x0000, 0x0000),
    "CloseCurly" => (0x0000, 0x0000),
    "CloseCurlyD" => (0x0000, 0x0000),
    "CloseCurlyDo" => (0x0000, 0x0000),
    "CloseCurlyDou" => (0x0000, 0x0000),
    "CloseCurlyDoub" => (0x0000, 0x0000),
    "CloseCurlyDoubl" => (0x0000, 0x0000),
    "CloseCurlyDouble" => (0x0000, 0x0000),
    "CloseCurlyDoubleQ" => (0x0000, 0x0000),
    "CloseCurlyDoubleQu" => (0x0000, 0x0000),
    "CloseCurlyDoubleQuo" => (0x0000, 0x0000),
    "CloseCurlyDoubleQuot" => (0x0000, 0x0000),
    "CloseCurlyDoubleQuote" => (0x0000, 0x0000),
    "CloseCurlyDoubleQuote;" => (0x201D, 0x0000),
    "CloseCurlyQ" => (0x0000, 0x0000),
    "CloseCurlyQu" => (0x0000, 0x0000),
    "CloseCurlyQuo" => (0x0000, 0x0000),
    "CloseCurlyQuot" => (0x0000, 0x0000),
    "CloseCurlyQuote" => (0x0000, 0x0000),
    "CloseCurlyQuote;" => (0x2019, 0x0000),
    "Co" => (0x0000, 0x0000),
    "Col" => (0x0000, 0x0000),
    "Colo" => (0x0000, 0x0000),
    "Colon" => (0x0000, 0x0000),
    "Colon;" => (0x2237, 0x0000),
    "Colone" => (0x0000, 0x0000),
    "Colone;" => (0x2A74, 0x0000),
    "Con" => (0x0000, 0x0000),
    "Cong" => (0x0000, 0x0000),
    "Congr" => (0x0000, 0x0000),
    "Congru" => (0x0000, 0x0000),
    "Congrue" => (0x0000, 0x0000),
    "Congruen" => (0x0000, 0x0000),
    "Congruent" => (0x0000, 0x0000),
    "Congruent;" => (0x2261, 0x0000),
    "Coni" => (0x0000, 0x0000),
    "Conin" => (0x0000, 0x0000),
    "Conint" => (0x0000, 0x0000),
    "Conint;" => (0x222F, 0x0000),
    "Cont" => (0x0000, 0x0000),
    "Conto" => (0x0000, 0x0000),
    "Contou" => (0x0000, 0x0000),
    "Contour" => (0x0000, 0x0000),
    "ContourI" => (0x0000, 0x0000),
    "ContourIn" => (0x0000, 0x0000),
    "ContourInt" => (0x0000, 0x0000),
    "ContourInte" => (0x0000, 0x0000),
    "ContourInteg" => (0x0000, 0x0000),
    "ContourIntegr" => (0x0000, 0x0000),
    "ContourIntegra" => (0x0000, 0x0000),
    "ContourIntegral" => (0x0000, 0x0000),
    "ContourIntegral;" => (0x222E, 0x0000),
    "Cop" => (0x0000, 0x0000),
    "Copf" => (0x0000, 0x0000),
    "Copf;" => (0x2102, 0x0000),
    "Copr" => (0x0000, 0x0000),
    "Copro" => (0x0000, 0x0000),
    "Coprod" => (0x0000, 0x0000),
    "Coprodu" => (0x0000, 0x0000),
    "Coproduc" => (0x0000, 0x0000),
    "Coproduct" => (0x0000, 0x0000),
    "Coproduct;" => (0x2210, 0x0000),
    "Cou" => (0x0000, 0x0000),
    "Coun" => (0x0000, 0x0000),
    "Count" => (0x0000, 0x0000),
    "Counte" => (0x0000, 0x0000),
    "Counter" => (0x0000, 0x0000),
    "CounterC" => (0x0000, 0x0000),
    "CounterCl" => (0x0000, 0x0000),
    "CounterClo" => (0x0000, 0x0000),
    "CounterCloc" => (0x0000, 0x0000),
    "CounterClock" => (0x0000, 0x0000),
    "CounterClockw" => (0x0000, 0x0000),
    "CounterClockwi" => (0x0000, 0x0000),
    "CounterClockwis" => (0x0000, 0x0000),
    "CounterClockwise" => (0x0000, 0x0000),
    "CounterClockwiseC" => (0x0000, 0x0000),
    "CounterClockwiseCo" => (0x0000, 0x0000),
    "CounterClockwiseCon" => (0x0000, 0x0000),
    "CounterClockwiseCont" => (0x0000, 0x0000),
    "CounterClockwiseConto" => (0x0000, 0x0000),
    "CounterClockwiseContou" => (0x0000, 0x0000),
    "CounterClockwiseContour" => (0x0000, 0x0000),
    "CounterClockwiseContourI" => (0x0000, 0x0000),
    "CounterClockwiseContourIn" => (0x0000, 0x0000),
    "CounterClockwiseContourInt" => (0x0000, 0x0000),
    "CounterClockwiseContourInte" => (0x0000, 0x0000),
    "CounterClockwiseContourInteg" => (0x0000, 0x0000),
    "CounterClockwiseContourIntegr" => (0x0000, 0x0000),
    "CounterClockwiseContourIntegra" => (0x0000, 0x0000),
    "CounterClockwiseContourIntegral" => (0x0000, 0x0000),
    "CounterClockwiseContourIntegral;" => (0x2233, 0x0000),
    "Cr" => (0x0000, 0x0000),
    "Cro" => (0x0000, 0x0000),
    "Cros" => (0x0000, 0x0000),
    "Cross" => (0x0000, 0x0000),
    "Cross;" => (0x2A2F, 0x0000),
    "Cs" => (0x0000, 0x0000),
    "Csc" => (0x0000, 0x0000),
    "Cscr" => (0x0000, 0x0000),
    "Cscr;" => (0x1D49E, 0x0000),
    "Cu" => (0x0000, 0x0000),
    "Cup" => (0x0000, 0x0000),
    "Cup;" => (0x22D3, 0x0000),
    "CupC" => (0x0000, 0x0000),
    "CupCa" => (0x0000, 0x0000),
    "CupCap" => (0x0000, 0x0000),
    "CupCap;" => (0x224D, 0x0000),
    "D" => (0x0000, 0x0000),
    "DD" => (0x0000, 0x0000),
    "DD;" => (0x2145, 0x0000),
    "DDo" => (0x0000, 0x0000),
    "DDot" => (0x0000, 0x0000),
    "DDotr" => (0x0000, 0x0000),
    "DDotra" => (0x0000, 0x0000),
    "DDotrah" => (0x0000, 0x0000),
    "DDotrahd" => (0x0000, 0x0000),
    "DDotrahd;" => (0x2911, 0x0000),
    "DJ" => (0x0000, 0x0000),
    "DJc" => (0x0000, 0x0000),
    "DJcy" => (0x0000, 0x0000),
    "DJcy;" => (0x0402, 0x0000),
    "DS" => (0x0000, 0x0000),
    "DSc" => (0x0000, 0x0000),
    "DScy" => (0x0000, 0x0000),
    "DScy;" => (0x0405, 0x0000),
    "DZ" => (0x0000, 0x0000),
    "DZc" => (0x0000, 0x0000),
    "DZcy" => (0x0000, 0x0000),
    "DZcy;" => (0x040F, 0x0000),
    "Da" => (0x0000, 0x0000),
    "Dag" => (0x0000, 0x0000),
    "Dagg" => (0x0000, 0x0000),
    "Dagge" => (0x0000, 0x0000),
    "Dagger" => (0x0000, 0x0000),
    "Dagger;" => (0x2021, 0x0000),
    "Dar" => (0x0000, 0x0000),
    "Darr" => (0x0000, 0x0000),
    "Darr;" => (0x21A1, 0x0000),
    "Das" => (0x0000, 0x0000),
    "Dash" => (0x0000, 0x0000),
    "Dashv" => (0x0000, 0x0000),
    "Dashv;" => (0x2AE4, 0x0000),
    "Dc" => (0x0000, 0x0000),
    "Dca" => (0x0000, 0x0000),
    "Dcar" => (0x0000, 0x0000),
    "Dcaro" => (0x0000, 0x0000),
    "Dcaron" => (0x0000, 0x0000),
    "Dcaron;" => (0x010E, 0x0000),
    "Dcy" => (0x0000, 0x0000),
    "Dcy;" => (0x0414, 0x0000),
    "De" => (0x0000, 0x0000),
    "Del" => (0x0000, 0x0000),
    "Del;" => (0x2207, 0x0000),
    "Delt" => (0x0000, 0x0000),
    "Delta" => (0x0000, 0x0000),
    "Delta;" => (0x0394, 0x0000),
    "Df" => (0x0000, 0x0000),
    "Dfr" => (0x0000, 0x0000),
    "Dfr;" => (0x1D507, 0x0000),
    "Di" => (0x0000, 0x0000),
    "Dia" => (0x0000, 0x0000),
    "Diac" => (0x0000, 0x0000),
    "Diacr" => (0x0000, 0x0000),
    "Diacri" => (0x0000, 0x0000),
    "Diacrit" => (0x0000, 0x0000),
    "Diacriti" => (0x0000, 0x0000),
    "Diacritic" => (0x0000, 0x0000),
    "Diacritica" => (0x0000, 0x0000),
    "Diacritical" => (0x0000, 0x0000),
    "DiacriticalA" => (0x0000, 0x0000),
    "DiacriticalAc" => (0x0000, 0x0000),
    "DiacriticalAcu" => (0x0000, 0x0000),
    "DiacriticalAcut" => (0x0000, 0x0000),
    "DiacriticalAcute" => (0x0000, 0x0000),
    "DiacriticalAcute;" => (0x00B4, 0x0000),
    "DiacriticalD" => (0x0000, 0x0000),
    "DiacriticalDo" => (0x0000, 0x0000),
    "DiacriticalDot" => (0x0000, 0x0000),
    "DiacriticalDot;" => (0x02D9, 0x0000),
    "DiacriticalDou" => (0x0000, 0x0000),
    "DiacriticalDoub" => (0x0000, 0x0000),
    "DiacriticalDoubl" => (0x0000, 0x0000),
    "DiacriticalDouble" => (0x0000, 0x0000),
    "DiacriticalDoubleA" => (0x0000, 0x0000),
    "DiacriticalDoubleAc" => (0x0000, 0x0000),
    "DiacriticalDoubleAcu" => (0x0000, 0x0000),
    "DiacriticalDoubleAcut" => (0x0000, 0x0000),
    "DiacriticalDoubleAcute" => (0x0000, 0x0000),
    "DiacriticalDoubleAcute;" => (0x02DD, 0x0000),
    "DiacriticalG" => (0x0000, 0x0000),
    "DiacriticalGr" => (0x0000, 0x0000),
    "DiacriticalGra" => (0x0000, 0x0000),
    "DiacriticalGrav" => (0x0000, 0x0000),
    "DiacriticalGrave" => (0x0000, 0x0000),
    "DiacriticalGrave;" => (0x0060, 0x0000),
    "DiacriticalT" => (0x0000, 0x0000),
    "DiacriticalTi" => (0x0000, 0x0000),
    "DiacriticalTil" => (0x0000, 0x0000),
    "DiacriticalTild" => (0x0000, 0x0000),
    "DiacriticalTilde" => (0x0000, 0x0000),
    "DiacriticalTilde;" => (0x02DC, 0x0000),
    "Diam" => (0x0000, 0x0000),
    "Diamo" => (0x0000, 0x0000),
    "Diamon" => (0x0000, 0x0000),
    "Diamond" => (0x0000, 0x0000),
    "Diamond;" => (0x22C4, 0x0000),
    "Dif" => (0x0000, 0x0000),
    "Diff" => (0x0000, 0x0000),
    "Diffe" => (0x0000, 0x0000),
    "Differ" => (0x0000, 0x0000),
    "Differe" => (0x0000, 0x0000),
    "Differen" => (0x0000, 0x0000),
    "Different" => (0x0000, 0x0000),
    "Differenti" => (0x0000, 0x0000),
    "Differentia" => (0x0000, 0x0000),
    "Differential" => (0x0000, 0x0000),
    "DifferentialD" => (0x0000, 0x0000),
    "DifferentialD;" => (0x2146, 0x0000),
    "Do" => (0x0000, 0x0000),
    "Dop" => (0x0000, 0x0000),
    "Dopf" => (0x0000, 0x0000),
    "Dopf;" => (0x1D53B, 0x0000),
    "Dot" => (0x0000, 0x0000),
    "Dot;" => (0x00A8, 0x0000),
    "DotD" => (0x0000, 0x0000),
    "DotDo" => (0x0000, 0x0000),
    "DotDot" => (0x0000, 0x0000),
    "DotDot;" => (0x20DC, 0x0000),
    "DotE" => (0x0000, 0x0000),
    "DotEq" => (0x0000, 0x0000),
    "DotEqu" => (0x0000, 0x0000),
    "DotEqua" => (0x0000, 0x0000),
    "DotEqual" => (0x0000, 0x0000),
    "DotEqual;" => (0x2250, 0x0000),
    "Dou" => (0x0000, 0x0000),
    "Doub" => (0x0000, 0x0000),
    "Doubl" => (0x0000, 0x0000),
    "Double" => (0x0000, 0x0000),
    "DoubleC" => (0x0000, 0x0000),
    "DoubleCo" => (0x0000, 0x0000),
    "DoubleCon" => (0x0000, 0x0000),
    "DoubleCont" => (0x0000, 0x0000),
    "DoubleConto" => (0x0000, 0x0000),
    "DoubleContou" => (0x0000, 0x0000),
    "DoubleContour" => (0x0000, 0x0000),
    "DoubleContourI" => (0x0000, 0x0000),
    "DoubleContourIn" => (0x0000, 0x0000),
    "DoubleContourInt" => (0x0000, 0x0000),
    "DoubleContourInte" => (0x0000, 0x0000),
    "DoubleContourInteg" => (0x0000, 0x0000),
    "DoubleContourIntegr" => (0x0000, 0x0000),
    "DoubleContourIntegra" => (0x0000, 0x0000),
    "DoubleContourIntegral" => (0x0000, 0x0000),
    "DoubleContourIntegral;" => (0x222F, 0x0000),
    "DoubleD" => (0x0000, 0x0000),
    "DoubleDo" => (0x0000, 0x0000),
    "DoubleDot" => (0x0000, 0x0000),
    "DoubleDot;" => (0x00A8, 0x0000),
    "DoubleDow" => (0x0000, 0x0000),
    "DoubleDown" => (0x0000, 0x0000),
    "DoubleDownA" => (0x0000, 0x0000),
    "DoubleDownAr" => (0x0000, 0x0000),
    "DoubleDownArr" => (0x0000, 0x0000),
    "DoubleDownArro" => (0x0000, 0x0000),
    "DoubleDownArrow" => (0x0000, 0x0000),
    "DoubleDownArrow;" => (0x21D3, 0x0000),
    "DoubleL" => (0x0000, 0x0000),
    "DoubleLe" => (0x0000, 0x0000),
    "DoubleLef" => (0x0000, 0x0000),
    "DoubleLeft" => (0x0000, 0x0000),
    "DoubleLeftA" => (0x0000, 0x0000),
    "DoubleLeftAr" => (0x0000, 0x0000),
    "DoubleLeftArr" => (0x0000, 0x0000),
    "DoubleLeftArro" => (0x0000, 0x0000),
    "DoubleLeftArrow" => (0x0000, 0x0000),
    "DoubleLeftArrow;" => (0x21D0, 0x0000),
    "DoubleLeftR" => (0x0000, 0x0000),
    "DoubleLeftRi" => (0x0000, 0x0000),
    "DoubleLeftRig" => (0x0000, 0x0000),
    "DoubleLeftRigh" => (0x0000, 0x0000),
    "DoubleLeftRight" => (0x0000, 0x0000),
    "DoubleLeftRightA" => (0x0000, 0x0000),
    "DoubleLeftRightAr" => (0x0000, 0x0000),
    "DoubleLeftRightArr" => (0x0000, 0x0000),
    "DoubleLeftRightArro" => (0x0000, 0x0000),
    "DoubleLeftRightArrow" => (0x0000, 0x0000),
    "DoubleLeftRightArrow;" => (0x21D4, 0x0000),
    "DoubleLeftT" => (0x0000, 0x0000),
    "DoubleLeftTe" => (0x0000, 0x0000),
    "DoubleLeftTee" => (0x0000, 0x0000),
    "DoubleLeftTee;" => (0x2AE4, 0x0000),
    "DoubleLo" => (0x0000, 0x0000),
    "DoubleLon" => (0x0000, 0x0000),
    "DoubleLong" => (0x0000, 0x0000),
    "DoubleLongL" => (0x0000, 0x0000),
    "DoubleLongLe" => (0x0000, 0x0000),
    "DoubleLongLef" => (0x0000, 0x0000),
    "DoubleLongLeft" => (0x0000, 0x0000),
    "DoubleLongLeftA" => (0x0000, 0x0000),
    "DoubleLongLeftAr" => (0x0000, 0x0000),
    "DoubleLongLeftArr" => (0x0000, 0x0000),
    "DoubleLongLeftArro" => (0x0000, 0x0000),
    "DoubleLongLeftArrow" => (0x0000, 0x0000),
    "DoubleLongLeftArrow;" => (0x27F8, 0x0000),
    "DoubleLongLeftR" => (0x0000, 0x0000),
    "DoubleLongLeftRi" => (0x0000, 0x0000),
    "DoubleLongLeftRig" => (0x0000, 0x0000),
    "DoubleLongLeftRigh" => (0x0000, 0x0000),
    "DoubleLongLeftRight" => (0x0000, 0x0000),
    "DoubleLongLeftRightA" => (0x0000, 0x0000),
    "DoubleLongLeftRightAr" => (0x0000, 0x0000),
    "DoubleLongLeftRightArr" => (0x0000, 0x0000),
    "DoubleLongLeftRightArro" => (0x0000, 0x0000),
    "DoubleLongLeftRightArrow" => (0x0000, 0x0000),
    "DoubleLongLeftRightArrow;" => (0x27FA, 0x0000),
    "DoubleLongR" => (0x0000, 0x0000),
    "DoubleLongRi" => (0x0000, 0x0000),
    "DoubleLongRig" => (0x0000, 0x0000),
    "DoubleLongRigh" => (0x0000, 0x0000),
    "DoubleLongRight" => (0x0000, 0x0000),
    "DoubleLongRightA" => (0x0000, 0x0000),
    "DoubleLongRightAr" => (0x0000, 0x0000),
    "DoubleLongRightArr" => (0x0000, 0x0000),
    "DoubleLongRightArro" => (0x0000, 0x0000),
    "DoubleLongRightArrow" => (0x0000, 0x0000),
    "DoubleLongRightArrow;" => (0x27F9, 0x0000),
    "DoubleR" => (0x0000, 0x0000),
    "DoubleRi" => (0x0000, 0x0000),
    "DoubleRig" => (0x0000, 0x0000),
    "DoubleRigh" => (0x0000, 0x0000),
    "DoubleRight" => (0x0000, 0x0000),
    "DoubleRightA" => (0x0000, 0x0000),
    "DoubleRightAr" => (0x0000, 0x0000),
    "DoubleRightArr" => (0x0000, 0x0000),
    "DoubleRightArro" => (0x0000, 0x0000),
    "DoubleRightArrow" => (0x0000, 0x0000),
    "DoubleRightArrow;" => (0x21D2, 0x0000),
    "DoubleRightT" => (0x0000, 0x0000),
    "DoubleRightTe" => (0x0000, 0x0000),
    "DoubleRightTee" => (0x0000, 0x0000),
    "DoubleRightTee;" => (0x22A8, 0x0000),
    "DoubleU" => (0x0000, 0x0000),
    "DoubleUp" => (0x0000, 0x0000),
    "DoubleUpA" => (0x0000, 0x0000),
    "DoubleUpAr" => (0x0000, 0x0000),
    "DoubleUpArr" => (0x0000, 0x0000),
    "DoubleUpArro" => (0x0000, 0x0000),
    "DoubleUpArrow" => (0x0000, 0x0000),
    "DoubleUpArrow;" => (0x21D1, 0x0000),
    "DoubleUpD" => (0x0000, 0x0000),
    "DoubleUpDo" => (0x0000, 0x0000),
    "DoubleUpDow" => (0x0000, 0x0000),
    "DoubleUpDown" => (0x0000, 0x0000),
    "DoubleUpDownA" => (0x0000, 0x0000),
    "DoubleUpDownAr" => (0x0000, 0x0000),
    "DoubleUpDownArr" => (0x0000, 0x0000),
    "DoubleUpDownArro" => (0x0000, 0x0000),
    "DoubleUpDownArrow" => (0x0000, 0x0000),
    "DoubleUpDownArrow;" => (0x21D5, 0x0000),
    "DoubleV" => (0x0000, 0x0000),
    "DoubleVe" => (0x0000, 0x0000),
    "DoubleVer" => (0x0000, 0x0000),
    "DoubleVert" => (0x0000, 0x0000),
    "DoubleVerti" => (0x0000, 0x0000),
    "DoubleVertic" => (0x0000, 0x0000),
    "DoubleVertica" => (0x0000, 0x0000),
    "DoubleVertical" => (0x0000, 0x0000),
    "DoubleVerticalB" => (0x0000, 0x0000),
    "DoubleVerticalBa" => (0x0000, 0x0000),
    "DoubleVerticalBar" => (0x0000, 0x0000),
    "DoubleVerticalBar;" => (0x2225, 0x0000),
    "Dow" => (0x0000, 0x0000),
    "Down" => (0x0000, 0x0000),
    "DownA" => (0x0000, 0x0000),
    "DownAr" => (0x0000, 0x0000),
    "DownArr" => (0x0000, 0x0000),
    "DownArro" => (0x0000, 0x0000),
    "DownArrow" => (0x0000, 0x0000),
    "DownArrow;" => (0x2193, 0x0000),
    "DownArrowB" => (0x0000, 0x0000),
    "DownArrowBa" => (0x0000, 0x0000),
    "DownArrowBar" => (0x0000, 0x0000),
    "DownArrowBar;" => (0x2913, 0x0000),
    "DownArrowU" => (0x0000, 0x0000),
    "DownArrowUp" => (0x0000, 0x0000),
    "DownArrowUpA" => (0x0000, 0x0000),
    "DownArrowUpAr" => (0x0000, 0x0000),
    "DownArrowUpArr" => (0x0000, 0x0000),
    "DownArrowUpArro" => (0x0000, 0x0000),
    "DownArrowUpArrow" => (0x0000, 0x0000),
    "DownArrowUpArrow;" => (0x21F5, 0x0000),
    "DownB" => (0x0000, 0x0000),
    "DownBr" => (0x0000, 0x0000),
    "DownBre" => (0x0000, 0x0000),
    "DownBrev" => (0x0000, 0x0000),
    "DownBreve" => (0x0000, 0x0000),
    "DownBreve;" => (0x0311, 0x0000),
    "DownL" => (0x0000, 0x0000),
    "DownLe" => (0x0000, 0x0000),
    "DownLef" => (0x0000, 0x0000),
    "DownLeft" => (0x0000, 0x0000),
    "DownLeftR" => (0x0000, 0x0000),
    "DownLeftRi" => (0x0000, 0x0000),
    "DownLeftRig" => (0x0000, 0x0000),
    "DownLeftRigh" => (0x0000, 0x0000),
    "DownLeftRight" => (0x0000, 0x0000),
    "DownLeftRightV" => (0x0000, 0x0000),
    "DownLeftRightVe" => (0x0000, 0x0000),
    "DownLeftRightVec" => (0x0000, 0x0000),
    "DownLeftRightVect" => (0x0000, 0x0000),
    "DownLeftRightVecto" => (0x0000, 0x0000),
    "DownLeftRightVector" => (0x0000, 0x0000),
    "DownLeftRightVector;" => (0x2950, 0x0000),
    "DownLeftT" => (0x0000, 0x0000),
    "DownLeftTe" => (0x0000, 0x0000),
    "DownLeftTee" => (0x0000, 0x0000),
    "DownLeftTeeV" => (0x0000, 0x0000),
    "DownLeftTeeVe" => (0x0000, 0x0000),
    "DownLeftTeeVec" => (0x0000, 0x0000),
    "DownLeftTeeVect" => (0x0000, 0x0000),
    "DownLeftTeeVecto" => (0x0000, 0x0000),
    "DownLeftTeeVector" => (0x0000, 0x0000),
    "DownLeftTeeVector;" => (0x295E, 0x0000),
    "DownLeftV" => (0x0000, 0x0000),
    "DownLeftVe" => (0x0000, 0x0000),
    "DownLeftVec" => (0x0000, 0x0000),
    "DownLeftVect" => (0x0000, 0x0000),
    "DownLeftVecto" => (0x0000, 0x0000),
    "DownLeftVector" => (0x0000, 0x0000),
    "DownLeftVector;" => (0x21BD, 0x0000),
    "DownLeftVectorB" => (0x0000, 0x0000),
    "DownLeftVectorBa" => (0x0000, 0x0000),
    "DownLeftVectorBar" => (0x0000, 0x0000),
    "DownLeftVectorBar;" => (0x2956, 0x0000),
    "DownR" => (0x0000, 0x0000),
    "DownRi" => (0x0000, 0x0000),
    "DownRig" => (0x0000, 0x0000),
    "DownRigh" => (0x0000, 0x0000),
    "DownRight" => (0x0000, 0x0000),
    "DownRightT" => (0x0000, 0x0000),
    "DownRightTe" => (0x0000, 0x0000),
    "DownRightTee" => (0x0000, 0x0000),
    "DownRightTeeV" => (0x0000, 0x0000),
    "DownRightTeeVe" => (0x0000, 0x0000),
    "DownRightTeeVec" => (0x0000, 0x0000),
    "DownRightTeeVect" => (0x0000, 0x0000),
    "DownRightTeeVecto" => (0x0000, 0x0000),
    "DownRightTeeVector" => (0x0000, 0x0000),
    "DownRightTeeVector;" => (0x295F, 0x0000),
    "DownRightV" => (0x0000, 0x0000),
    "DownRightVe" => (0x0000, 0x0000),
    "DownRightVec" => (0x0000, 0x0000),
    "DownRightVect" => (0x0000, 0x0000),
    "DownRightVecto" => (0x0000, 0x0000),
    "DownRightVector" => (0x0000, 0x0000),
    "DownRightVector;" => (0x21C1, 0x0000),
    "DownRightVectorB" => (0x0000, 0x0000),
    "DownRightVectorBa" => (0x0000, 0x0000),
    "DownRightVectorBar" => (0x0000, 0x0000),
    "DownRightVectorBar;" => (0x2957, 0x0000),
    "DownT" => (0x0000, 0x0000),
    "DownTe" => (0x0000, 0x0000),
    "DownTee" => (0x0000, 0x0000),
    "DownTee;" => (0x22A4, 0x0000),
    "DownTeeA" => (0x0000, 0x0000),
    "DownTeeAr" => (0x0000, 0x0000),
    "DownTeeArr" => (0x0000, 0x0000),
    "DownTeeArro" => (0x0000, 0x0000),
    "DownTeeArrow" => (0x0000, 0x0000),
    "DownTeeArrow;" => (0x21A7, 0x0000),
    "Downa" => (0x0000, 0x0000),
    "Downar" => (0x0000, 0x0000),
    "Downarr" => (0x0000, 0x0000),
    "Downarro" => (0x0000, 0x0000),
    "Downarrow" => (0x0000, 0x0000),
    "Downarrow;" => (0x21D3, 0x0000),
    "Ds" => (0x0000, 0x0000),
    "Dsc" => (0x0000, 0x0000),
    "Dscr" => (0x0000, 0x0000),
    "Dscr;" => (0x1D49F, 0x0000),
    "Dst" => (0x0000, 0x0000),
    "Dstr" => (0x0000, 0x0000),
    "Dstro" => (0x0000, 0x0000),
    "Dstrok" => (0x0000, 0x0000),
    "Dstrok;" => (0x0110, 0x0000),
    "E" => (0x0000, 0x0000),
    "EN" => (0x0000, 0x0000),
    "ENG" => (0x0000, 0x0000),
    "ENG;" => (0x014A, 0x0000),
    "ET" => (0x0000, 0x0000),
    "ETH" => (0x00D0, 0x0000),
    "ETH;" => (0x00D0, 0x0000),
    "Ea" => (0x0000, 0x0000),
    "Eac" => (0x0000, 0x0000),
    "Eacu" => (0x0000, 0x0000),
    "Eacut" => (0x0000, 0x0000),
    "Eacute" => (0x00C9, 0x0000),
    "Eacute;" => (0x00C9, 0x0000),
    "Ec" => (0x0000, 0x0000),
    "Eca" => (0x0000, 0x0000),
    "Ecar" => (0x0000, 0x0000),
    "Ecaro" => (0x0000, 0x0000),
    "Ecaron" => (0x0000, 0x0000),
    "Ecaron;" => (0x011A, 0x0000),
    "Eci" => (0x0000, 0x0000),
    "Ecir" => (0x0000, 0x0000),
    "Ecirc" => (0x00CA, 0x0000),
    "Ecirc;" => (0x00CA, 0x0000),
    "Ecy" => (0x0000, 0x0000),
    "Ecy;" => (0x042D, 0x0000),
    "Ed" => (0x0000, 0x0000),
    "Edo" => (0x0000, 0x0000),
    "Edot" => (0x0000, 0x0000),
    "Edot;" => (0x0116, 0x0000),
    "Ef" => (0x0000, 0x0000),
    "Efr" => (0x0000, 0x0000),
    "Efr;" => (0x1D508, 0x0000),
    "Eg" => (0x0000, 0x0000),
    "Egr" => (0x0000, 0x0000),
    "Egra" => (0x0000, 0x0000),
    "Egrav" => (0x0000, 0x0000),
    "Egrave" => (0x00C8, 0x0000),
    "Egrave;" => (0x00C8, 0x0000),
    "El" => (0x0000, 0x0000),
    "Ele" => (0x0000, 0x0000),
    "Elem" => (0x0000, 0x0000),
    "Eleme" => (0x0000, 0x0000),
    "Elemen" => (0x0000, 0x0000),
    "Element" => (0x0000, 0x0000),
    "Element;" => (0x2208, 0x0000),
    "Em" => (0x0000, 0x0000),
    "Ema" => (0x0000, 0x0000),
    "Emac" => (0x0000, 0x0000),
    "Emacr" => (0x0000, 0x0000),
    "Emacr;" => (0x0112, 0x0000),
    "Emp" => (0x0000, 0x0000),
    "Empt" => (0x0000, 0x0000),
    "Empty" => (0x0000, 0x0000),
    "EmptyS" => (0x0000, 0x0000),
    "EmptySm" => (0x0000, 0x0000),
    "EmptySma" => (0x0000, 0x0000),
    "EmptySmal" => (0x0000, 0x0000),
    "EmptySmall" => (0x0000, 0x0000),
    "EmptySmallS" => (0x0000, 0x0000),
    "EmptySmallSq" => (0x0000, 0x0000),
    "EmptySmallSqu" => (0x0000, 0x0000),
    "EmptySmallSqua" => (0x0000, 0x0000),
    "EmptySmallSquar" => (0x0000, 0x0000),
    "EmptySmallSquare" => (0x0000, 0x0000),
    "EmptySmallSquare;" => (0x25FB, 0x0000),
    "EmptyV" => (0x0000, 0x0000),
    "EmptyVe" => (0x0000, 0x0000),
    "EmptyVer" => (0x0000, 0x0000),
    "EmptyVery" => (0x0000, 0x0000),
    "EmptyVeryS" => (0x0000, 0x0000),
    "EmptyVerySm" => (0x0000, 0x0000),
    "EmptyVerySma" => (0x0000, 0x0000),
    "EmptyVerySmal" => (0x0000, 0x0000),
    "EmptyVerySmall" => (0x0000, 0x0000),
    "EmptyVerySmallS" => (0x0000, 0x0000),
    "EmptyVerySmallSq" => (0x0000, 0x0000),
    "EmptyVerySmallSqu" => (0x0000, 0x0000),
    "EmptyVerySmallSqua" => (0x0000, 0x0000),
    "EmptyVerySmallSquar" => (0x0000, 0x0000),
    "EmptyVerySmallSquare" => (0x0000, 0x0000),
    "EmptyVerySmallSquare;" => (0x25AB, 0x0000),
    "Eo" => (0x0000, 0x0000),
    "Eog" => (0x0000, 0x0000),
    "Eogo" => (0x0000, 0x0000),
    "Eogon" => (0x0000, 0x0000),
    "Eogon;" => (0x0118, 0x0000),
    "Eop" => (0x0000, 0x0000),
    "Eopf" => (0x0000, 0x0000),
    "Eopf;" => (0x1D53C, 0x0000),
    "Ep" => (0x0000, 0x0000),
    "Eps" => (0x0000, 0x0000),
    "Epsi" => (0x0000, 0x0000),
    "Epsil" => (0x0000, 0x0000),
    "Epsilo" => (0x0000, 0x0000),
    "Epsilon" => (0x0000, 0x0000),
    "Epsilon;" => (0x0395, 0x0000),
    "Eq" => (0x0000, 0x0000),
    "Equ" => (0x0000, 0x0000),
    "Equa" => (0x0000, 0x0000),
    "Equal" => (0x0000, 0x0000),
    "Equal;" => (0x2A75, 0x0000),
    "EqualT" => (0x0000, 0x0000),
    "EqualTi" => (0x0000, 0x0000),
    "EqualTil" => (0x0000, 0x0000),
    "EqualTild" => (0x0000, 0x0000),
    "EqualTilde" => (0x0000, 0x0000),
    "EqualTilde;" => (0x2242, 0x0000),
    "Equi" => (0x0000, 0x0000),
    "Equil" => (0x0000, 0x0000),
    "Equili" => (0x0000, 0x0000),
    "Equilib" => (0x0000, 0x0000),
    "Equilibr" => (0x0000, 0x0000),
    "Equilibri" => (0x0000, 0x0000),
    "Equilibriu" => (0x0000, 0x0000),
    "Equilibrium" => (0x0000, 0x0000),
    "Equilibrium;" => (0x21CC, 0x0000),
    "Es" => (0x0000, 0x0000),
    "Esc" => (0x0000, 0x0000),
    "Escr" => (0x0000, 0x0000),
    "Escr;" => (0x2130, 0x0000),
    "Esi" => (0x0000, 0x0000),
    "Esim" => (0x0000, 0x0000),
    "Esim;" => (0x2A73, 0x0000),
    "Et" => (0x0000, 0x0000),
    "Eta" => (0x0000, 0x0000),
    "Eta;" => (0x0397, 0x0000),
    "Eu" => (0x0000, 0x0000),
    "Eum" => (0x0000, 0x0000),
    "Euml" => (0x00CB, 0x0000),
    "Euml;" => (0x00CB, 0x0000),
    "Ex" => (0x0000, 0x0000),
    "Exi" => (0x0000, 0x0000),
    "Exis" => (0x0000, 0x0000),
    "Exist" => (0x0000, 0x0000),
    "Exists" => (0x0000, 0x0000),
    "Exists;" => (0x2203, 0x0000),
    "Exp" => (0x0000, 0x0000),
    "Expo" => (0x0000, 0x0000),
    "Expon" => (0x0000, 0x0000),
    "Expone" => (0x0000, 0x0000),
    "Exponen" => (0x0000, 0x0000),
    "Exponent" => (0x0000, 0x0000),
    "Exponenti" => (0x0000, 0x0000),
    "Exponentia" => (0x0000, 0x0000),
    "Exponential" => (0x0000, 0x0000),
    "ExponentialE" => (0x0000, 0x0000),
    "ExponentialE;" => (0x2147, 0x0000),
    "F" => (0x0000, 0x0000),
    "Fc" => (0x0000, 0x0000),
    "Fcy" => (0x0000, 0x0000),
    "Fcy;" => (0x0424, 0x0000),
    "Ff" => (0x0000, 0x0000),
    "Ffr" => (0x0000, 0x0000),
    "Ffr;" => (0x1D509, 0x0000),
    "Fi" => (0x0000, 0x0000),
    "Fil" => (0x0000, 0x0000),
    "Fill" => (0x0000, 0x0000),
    "Fille" => (0x0000, 0x0000),
    "Filled" => (0x0000, 0x0000),
    "FilledS" => (0x0000, 0x0000),
    "FilledSm" => (0x0000, 0x0000),
    "FilledSma" => (0x0000, 0x0000),
    "FilledSmal" => (0x0000, 0x0000),
    "FilledSmall" => (0x0000, 0x0000),
    "FilledSmallS" => (0x0000, 0x0000),
    "FilledSmallSq" => (0x0000, 0x0000),
    "FilledSmallSqu" => (0x0000, 0x0000),
    "FilledSmallSqua" => (0x0000, 0x0000),
    "FilledSmallSquar" => (0x0000, 0x0000),
    "FilledSmallSquare" => (0x0000, 0x0000),
    "FilledSmallSquare;" => (0x25FC, 0x0000),
    "FilledV" => (0x0000, 0x0000),
    "FilledVe" => (0x0000, 0x0000),
    "FilledVer" => (0x0000, 0x0000),
    "FilledVery" => (0x0000, 0x0000),
    "FilledVeryS" => (0x0000, 0x0000),
    "FilledVerySm" => (0x0000, 0x0000),
    "FilledVerySma" => (0x0000, 0x0000),
    "FilledVerySmal" => (0x0000, 0x0000),
    "FilledVerySmall" => (0x0000, 0x0000),
    "FilledVerySmallS" => (0x0000, 0x0000),
    "FilledVerySmallSq" => (0x0000, 0x0000),
    "FilledVerySmallSqu" => (0x0000, 0x0000),
    "FilledVerySmallSqua" => (0x0000, 0x0000),
    "FilledVerySmallSquar" => (0x0000, 0x0000),
    "FilledVerySmallSquare" => (0x0000, 0x0000),
    "FilledVerySmallSquare;" => (0x25AA, 0x0000),
    "Fo" => (0x0000, 0x0000),
    "Fop" => (0x0000, 0x0000),
    "Fopf" => (0x0000, 0x0000),
    "Fopf;" => (0x1D53D, 0x0000),
    "For" => (0x0000, 0x0000),
    "ForA" => (0x0000, 0x0000),
    "ForAl" => (0x0000, 0x0000),
    "ForAll" => (0x0000, 0x0000),
    "ForAll;" => (0x2200, 0x0000),
    "Fou" => (0x0000, 0x0000),
    "Four" => (0x0000, 0x0000),
    "Fouri" => (0x0000, 0x0000),
    "Fourie" => (0x0000, 0x0000),
    "Fourier" => (0x0000, 0x0000),
    "Fouriert" => (0x0000, 0x0000),
    "Fouriertr" => (0x0000, 0x0000),
    "Fouriertrf" => (0x0000, 0x0000),
    "Fouriertrf;" => (0x2131, 0x0000),
    "Fs" => (0x0000, 0x0000),
    "Fsc" => (0x0000, 0x0000),
    "Fscr" => (0x0000, 0x0000),
    "Fscr;" => (0x2131, 0x0000),
    "G" => (0x0000, 0x0000),
    "GJ" => (0x0000, 0x0000),
    "GJc" => (0x0000, 0x0000),
    "GJcy" => (0x0000, 0x0000),
    "GJcy;" => (0x0403, 0x0000),
    "GT" => (0x003E, 0x0000),
    "GT;" => (0x003E, 0x0000),
    "Ga" => (0x0000, 0x0000),
    "Gam" => (0x0000, 0x0000),
    "Gamm" => (0x0000, 0x0000),
    "Gamma" => (0x0000, 0x0000),
    "Gamma;" => (0x0393, 0x0000),
    "Gammad" => (0x0000, 0x0000),
    "Gammad;" => (0x03DC, 0x0000),
    "Gb" => (0x0000, 0x0000),
    "Gbr" => (0x0000, 0x0000),
    "Gbre" => (0x0000, 0x0000),
    "Gbrev" => (0x0000, 0x0000),
    "Gbreve" => (0x0000, 0x0000),
    "Gbreve;" => (0x011E, 0x0000),
    "Gc" => (0x0000, 0x0000),
    "Gce" => (0x0000, 0x0000),
    "Gced" => (0x0000, 0x0000),
    "Gcedi" => (0x0000, 0x0000),
    "Gcedil" => (0x0000, 0x0000),
    "Gcedil;" => (0x0122, 0x0000),
    "Gci" => (0x0000, 0x0000),
    "Gcir" => (0x0000, 0x0000),
    "Gcirc" => (0x0000, 0x0000),
    "Gcirc;" => (0x011C, 0x0000),
    "Gcy" => (0x0000, 0x0000),
    "Gcy;" => (0x0413, 0x0000),
    "Gd" => (0x0000, 0x0000),
    "Gdo" => (0x0000, 0x0000),
    "Gdot" => (0x0000, 0x0000),
    "Gdot;" => (0x0120, 0x0000),
    "Gf" => (0x0000, 0x0000),
    "Gfr" => (0x0000, 0x0000),
    "Gfr;" => (0x1D50A, 0x0000),
    "Gg" => (0x0000, 0x0000),
    "Gg;" => (0x22D9, 0x0000),
    "Go" => (0x0000, 0x0000),
    "Gop" => (0x0000, 0x0000),
    "Gopf" => (0x0000, 0x0000),
    "Gopf;" => (0x1D53E, 0x0000),
    "Gr" => (0x0000, 0x0000),
    "Gre" => (0x0000, 0x0000),
    "Grea" => (0x0000, 0x0000),
    "Great" => (0x0000, 0x0000),
    "Greate" => (0x0000, 0x0000),
    "Greater" => (0x0000, 0x0000),
    "GreaterE" => (0x0000, 0x0000),
    "GreaterEq" => (0x0000, 0x0000),
    "GreaterEqu" => (0x0000, 0x0000),
    "GreaterEqua" => (0x0000, 0x0000),
    "GreaterEqual" => (0x0000, 0x0000),
    "GreaterEqual;" => (0x2265, 0x0000),
    "GreaterEqualL" => (0x0000, 0x0000),
    "GreaterEqualLe" => (0x0000, 0x0000),
    "GreaterEqualLes" => (0x0000, 0x0000),
    "GreaterEqualLess" => (0x0000, 0x0000),
    "GreaterEqualLess;" => (0x22DB, 0x0000),
    "GreaterF" => (0x0000, 0x0000),
    "GreaterFu" => (0x0000, 0x0000),
    "GreaterFul" => (0x0000, 0x0000),
    "GreaterFull" => (0x0000, 0x0000),
    "GreaterFullE" => (0x0000, 0x0000),
    "GreaterFullEq" => (0x0000, 0x0000),
    "GreaterFullEqu" => (0x0000, 0x0000),
    "GreaterFullEqua" => (0x0000, 0x0000),
    "GreaterFullEqual" => (0x0000, 0x0000),
    "GreaterFullEqual;" => (0x2267, 0x0000),
    "GreaterG" => (0x0000, 0x0000),
    "GreaterGr" => (0x0000, 0x0000),
    "GreaterGre" => (0x0000, 0x0000),
    "GreaterGrea" => (0x0000, 0x0000),
    "GreaterGreat" => (0x0000, 0x0000),
    "GreaterGreate" => (0x0000, 0x0000),
    "GreaterGreater" => (0x0000, 0x0000),
    "GreaterGreater;" => (0x2AA2, 0x0000),
    "GreaterL" => (0x0000, 0x0000),
    "GreaterLe" => (0x0000, 0x0000),
    "GreaterLes" => (0x0000, 0x0000),
    "GreaterLess" => (0x0000, 0x0000),
    "GreaterLess;" => (0x2277, 0x0000),
    "GreaterS" => (0x0000, 0x0000),
    "GreaterSl" => (0x0000, 0x0000),
    "GreaterSla" => (0x0000, 0x0000),
    "GreaterSlan" => (0x0000, 0x0000),
    "GreaterSlant" => (0x0000, 0x0000),
    "GreaterSlantE" => (0x0000, 0x0000),
    "GreaterSlantEq" => (0x0000, 0x0000),
    "GreaterSlantEqu" => (0x0000, 0x0000),
    "GreaterSlantEqua" => (0x0000, 0x0000),
    "GreaterSlantEqual" => (0x0000, 0x0000),
    "GreaterSlantEqual;" => (0x2A7E, 0x0000),
    "GreaterT" => (0x0000, 0x0000),
    "GreaterTi" => (0x0000, 0x0000),
    "GreaterTil" => (0x0000, 0x0000),
    "GreaterTild" => (0x0000, 0x0000),
    "GreaterTilde" => (0x0000, 0x0000),
    "GreaterTilde;" => (0x2273, 0x0000),
    "Gs" => (0x0000, 0x0000),
    "Gsc" => (0x0000, 0x0000),
    "Gscr" => (0x0000, 0x0000),
    "Gscr;" => (0x1D4A2, 0x0000),
    "Gt" => (0x0000, 0x0000),
    "Gt;" => (0x226B, 0x0000),
    "H" => (0x0000, 0x0000),
    "HA" => (0x0000, 0x0000),
    "HAR" => (0x0000, 0x0000),
    "HARD" => (0x0000, 0x0000),
    "HARDc" => (0x0000, 0x0000),
    "HARDcy" => (0x0000, 0x0000),
    "HARDcy;" => (0x042A, 0x0000),
    "Ha" => (0x0000, 0x0000),
    "Hac" => (0x0000, 0x0000),
    "Hace" => (0x0000, 0x0000),
    "Hacek" => (0x0000, 0x0000),
    "Hacek;" => (0x02C7, 0x0000),
    "Hat" => (0x0000, 0x0000),
    "Hat;" => (0x005E, 0x0000),
    "Hc" => (0x0000, 0x0000),
    "Hci" => (0x0000, 0x0000),
    "Hcir" => (0x0000, 0x0000),
    "Hcirc" => (0x0000, 0x0000),
    "Hcirc;" => (0x0124, 0x0000),
    "Hf" => (0x0000, 0x0000),
    "Hfr" => (0x0000, 0x0000),
    "Hfr;" => (0x210C, 0x0000),
    "Hi" => (0x0000, 0x0000),
    "Hil" => (0x0000, 0x0000),
    "Hilb" => (0x0000, 0x0000),
    "Hilbe" => (0x0000, 0x0000),
    "Hilber" => (0x0000, 0x0000),
    "Hilbert" => (0x0000, 0x0000),
    "HilbertS" => (0x0000, 0x0000),
    "HilbertSp" => (0x0000, 0x0000),
    "HilbertSpa" => (0x0000, 0x0000),
    "HilbertSpac" => (0x0000, 0x0000),
    "HilbertSpace" => (0x0000, 0x0000),
    "HilbertSpace;" => (0x210B, 0x0000),
    "Ho" => (0x0000, 0x0000),
    "Hop" => (0x0000, 0x0000),
    "Hopf" => (0x0000, 0x0000),
    "Hopf;" => (0x210D, 0x0000),
    "Hor" => (0x0000, 0x0000),
    "Hori" => (0x0000, 0x0000),
    "Horiz" => (0x0000, 0x0000),
    "Horizo" => (0x0000, 0x0000),
    "Horizon" => (0x0000, 0x0000),
    "Horizont" => (0x0000, 0x0000),
    "Horizonta" => (0x0000, 0x0000),
    "Horizontal" => (0x0000, 0x0000),
    "HorizontalL" => (0x0000, 0x0000),
    "HorizontalLi" => (0x0000, 0x0000),
    "HorizontalLin" => (0x0000, 0x0000),
    "HorizontalLine" => (0x0000, 0x0000),
    "HorizontalLine;" => (0x2500, 0x0000),
    "Hs" => (0x0000, 0x0000),
    "Hsc" => (0x0000, 0x0000),
    "Hscr" => (0x0000, 0x0000),
    "Hscr;" => (0x210B, 0x0000),
    "Hst" => (0x0000, 0x0000),
    "Hstr" => (0x0000, 0x0000),
    "Hstro" => (0x0000, 0x0000),
    "Hstrok" => (0x0000, 0x0000),
    "Hstrok;" => (0x0126, 0x0000),
    "Hu" => (0x0000, 0x0000),
    "Hum" => (0x0000, 0x0000),
    "Hump" => (0x0000, 0x0000),
    "HumpD" => (0x0000, 0x0000),
    "HumpDo" => (0x0000, 0x0000),
    "HumpDow" => (0x0000, 0x0000),
    "HumpDown" => (0x0000, 0x0000),
    "HumpDownH" => (0x0000, 0x0000),
    "HumpDownHu" => (0x0000, 0x0000),
    "HumpDownHum" => (0x0000, 0x0000),
    "HumpDownHump" => (0x0000, 0x0000),
    "HumpDownHump;" => (0x224E, 0x0000),
    "HumpE" => (0x0000, 0x0000),
    "HumpEq" => (0x0000, 0x0000),
    "HumpEqu" => (0x0000, 0x0000),
    "HumpEqua" => (0x0000, 0x0000),
    "HumpEqual" => (0x0000, 0x0000),
    "HumpEqual;" => (0x224F, 0x0000),
    "I" => (0x0000, 0x0000),
    "IE" => (0x0000, 0x0000),
    "IEc" => (0x0000, 0x0000),
    "IEcy" => (0x0000, 0x0000),
    "IEcy;" => (0x0415, 0x0000),
    "IJ" => (0x0000, 0x0000),
    "IJl" => (0x0000, 0x0000),
    "IJli" => (0x0000, 0x0000),
    "IJlig" => (0x0000, 0x0000),
    "IJlig;" => (0x0132, 0x0000),
    "IO" => (0x0000, 0x0000),
    "IOc" => (0x0000, 0x0000),
    "IOcy" => (0x0000, 0x0000),
    "IOcy;" => (0x0401, 0x0000),
    "Ia" => (0x0000, 0x0000),
    "Iac" => (0x0000, 0x0000),
    "Iacu" => (0x0000, 0x0000),
    "Iacut" => (0x0000, 0x0000),
    "Iacute" => (0x00CD, 0x0000),
    "Iacute;" => (0x00CD, 0x0000),
    "Ic" => (0x0000, 0x0000),
    "Ici" => (0x0000, 0x0000),
    "Icir" => (0x0000, 0x0000),
    "Icirc" => (0x00CE, 0x0000),
    "Icirc;" => (0x00CE, 0x0000),
    "Icy" => (0x0000, 0x0000),
    "Icy;" => (0x0418, 0x0000),
    "Id" => (0x0000, 0x0000),
    "Ido" => (0x0000, 0x0000),
    "Idot" => (0x0000, 0x0000),
    "Idot;" => (0x0130, 0x0000),
    "If" => (0x0000, 0x0000),
    "Ifr" => (0x0000, 0x0000),
    "Ifr;" => (0x2111, 0x0000),
    "Ig" => (0x0000, 0x0000),
    "Igr" => (0x0000, 0x0000),
    "Igra" => (0x0000, 0x0000),
    "Igrav" => (0x0000, 0x0000),
    "Igrave" => (0x00CC, 0x0000),
    "Igrave;" => (0x00CC, 0x0000),
    "Im" => (0x0000, 0x0000),
    "Im;" => (0x2111, 0x0000),
    "Ima" => (0x0000, 0x0000),
    "Imac" => (0x0000, 0x0000),
    "Imacr" => (0x0000, 0x0000),
    "Imacr;" => (0x012A, 0x0000),
    "Imag" => (0x0000, 0x0000),
    "Imagi" => (0x0000, 0x0000),
    "Imagin" => (0x0000, 0x0000),
    "Imagina" => (0x0000, 0x0000),
    "Imaginar" => (0x0000, 0x0000),
    "Imaginary" => (0x0000, 0x0000),
    "ImaginaryI" => (0x0000, 0x0000),
    "ImaginaryI;" => (0x2148, 0x0000),
    "Imp" => (0x0000, 0x0000),
    "Impl" => (0x0000, 0x0000),
    "Impli" => (0x0000, 0x0000),
    "Implie" => (0x0000, 0x0000),
    "Implies" => (0x0000, 0x0000),
    "Implies;" => (0x21D2, 0x0000),
    "In" => (0x0000, 0x0000),
    "Int" => (0x0000, 0x0000),
    "Int;" => (0x222C, 0x0000),
    "Inte" => (0x0000, 0x0000),
    "Integ" => (0x0000, 0x0000),
    "Integr" => (0x0000, 0x0000),
    "Integra" => (0x0000, 0x0000),
    "Integral" => (0x0000, 0x0000),
    "Integral;" => (0x222B, 0x0000),
    "Inter" => (0x0000, 0x0000),
    "Inters" => (0x0000, 0x0000),
    "Interse" => (0x0000, 0x0000),
    "Intersec" => (0x0000, 0x0000),
    "Intersect" => (0x0000, 0x0000),
    "Intersecti" => (0x0000, 0x0000),
    "Intersectio" => (0x0000, 0x0000),
    "Intersection" => (0x0000, 0x0000),
    "Intersection;" => (0x22C2, 0x0000),
    "Inv" => (0x0000, 0x0000),
    "Invi" => (0x0000, 0x0000),
    "Invis" => (0x0000, 0x0000),
    "Invisi" => (0x0000, 0x0000),
    "Invisib" => (0x0000, 0x0000),
    "Invisibl" => (0x0000, 0x0000),
    "Invisible" => (0x0000, 0x0000),
    "InvisibleC" => (0x0000, 0x0000),
    "InvisibleCo" => (0x0000, 0x0000),
    "InvisibleCom" => (0x0000, 0x0000),
    "InvisibleComm" => (0x0000, 0x0000),
    "InvisibleComma" => (0x0000, 0x0000),
    "InvisibleComma;" => (0x2063, 0x0000),
    "InvisibleT" => (0x0000, 0x0000),
    "InvisibleTi" => (0x0000, 0x0000),
    "InvisibleTim" => (0x0000, 0x0000),
    "InvisibleTime" => (0x0000, 0x0000),
    "InvisibleTimes" => (0x0000, 0x0000),
    "InvisibleTimes;" => (0x2062, 0x0000),
    "Io" => (0x0000, 0x0000),
    "Iog" => (0x0000, 0x0000),
    "Iogo" => (0x0000, 0x0000),
    "Iogon" => (0x0000, 0x0000),
    "Iogon;" => (0x012E, 0x0000),
    "Iop" => (0x0000, 0x0000),
    "Iopf" => (0x0000, 0x0000),
    "Iopf;" => (0x1D540, 0x0000),
    "Iot" => (0x0000, 0x0000),
    "Iota" => (0x0000, 0x0000),
    "Iota;" => (0x0399, 0x0000),
    "Is" => (0x0000, 0x0000),
    "Isc" => (0x0000, 0x0000),
    "Iscr" => (0x0000, 0x0000),
    "Iscr;" => (0x2110, 0x0000),
    "It" => (0x0000, 0x0000),
    "Iti" => (0x0000, 0x0000),
    "Itil" => (0x0000, 0x0000),
    "Itild" => (0x0000, 0x0000),
    "Itilde" => (0x0000, 0x0000),
    "Itilde;" => (0x0128, 0x0000),
    "Iu" => (0x0000, 0x0000),
    "Iuk" => (0x0000, 0x0000),
    "Iukc" => (0x0000, 0x0000),
    "Iukcy" => (0x0000, 0x0000),
    "Iukcy;" => (0x0406, 0x0000),
    "Ium" => (0x0000, 0x0000),
    "Iuml" => (0x00CF, 0x0000),
    "Iuml;" => (0x00CF, 0x0000),
    "J" => (0x0000, 0x0000),
    "Jc" => (0x0000, 0x0000),
    "Jci" => (0x0000, 0x0000),
    "Jcir" => (0x0000, 0x0000),
    "Jcirc" => (0x0000, 0x0000),
    "Jcirc;" => (0x0134, 0x0000),
    "Jcy" => (0x0000, 0x0000),
    "Jcy;" => (0x0419, 0x0000),
    "Jf" => (0x0000, 0x0000),
    "Jfr" => (0x0000, 0x0000),
    "Jfr;" => (0x1D50D, 0x0000),
    "Jo" => (0x0000, 0x0000),
    "Jop" => (0x0000, 0x0000),
    "Jopf" => (0x0000, 0x0000),
    "Jopf;" => (0x1D541, 0x0000),
    "Js" => (0x0000, 0x0000),
    "Jsc" => (0x0000, 0x0000),
    "Jscr" => (0x0000, 0x0000),
    "Jscr;" => (0x1D4A5, 0x0000),
    "Jse" => (0x0000, 0x0000),
    "Jser" => (0x0000, 0x0000),
    "Jserc" => (0x0000, 0x0000),
    "Jsercy" => (0x0000, 0x0000),
    "Jsercy;" => (0x0408, 0x0000),
    "Ju" => (0x0000, 0x0000),
    "Juk" => (0x0000, 0x0000),
    "Jukc" => (0x0000, 0x0000),
    "Jukcy" => (0x0000, 0x0000),
    "Jukcy;" => (0x0404, 0x0000),
    "K" => (0x0000, 0x0000),
    "KH" => (0x0000, 0x0000),
    "KHc" => (0x0000, 0x0000),
    "KHcy" => (0x0000, 0x0000),
    "KHcy;" => (0x0425, 0x0000),
    "KJ" => (0x0000, 0x0000),
    "KJc" => (0x0000, 0x0000),
    "KJcy" => (0x0000, 0x0000),
    "KJcy;" => (0x040C, 0x0000),
    "Ka" => (0x0000, 0x0000),
    "Kap" => (0x0000, 0x0000),
    "Kapp" => (0x0000, 0x0000),
    "Kappa" => (0x0000, 0x0000),
    "Kappa;" => (0x039A, 0x0000),
    "Kc" => (0x0000, 0x0000),
    "Kce" => (0x0000, 0x0000),
    "Kced" => (0x0000, 0x0000),
    "Kcedi" => (0x0000, 0x0000),
    "Kcedil" => (0x0000, 0x0000),
    "Kcedil;" => (0x0136, 0x0000),
    "Kcy" => (0x0000, 0x0000),
    "Kcy;" => (0x041A, 0x0000),
    "Kf" => (0x0000, 0x0000),
    "Kfr" => (0x0000, 0x0000),
    "Kfr;" => (0x1D50E, 0x0000),
    "Ko" => (0x0000, 0x0000),
    "Kop" => (0x0000, 0x0000),
    "Kopf" => (0x0000, 0x0000),
    "Kopf;" => (0x1D542, 0x0000),
    "Ks" => (0x0000, 0x0000),
    "Ksc" => (0x0000, 0x0000),
    "Kscr" => (0x0000, 0x0000),
    "Kscr;" => (0x1D4A6, 0x0000),
    "L" => (0x0000, 0x0000),
    "LJ" => (0x0000, 0x0000),
    "LJc" => (0x0000, 0x0000),
    "LJcy" => (0x0000, 0x0000),
    "LJcy;" => (0x0409, 0x0000),
    "LT" => (0x003C, 0x0000),
    "LT;" => (0x003C, 0x0000),
    "La" => (0x0000, 0x0000),
    "Lac" => (0x0000, 0x0000),
    "Lacu" => (0x0000, 0x0000),
    "Lacut" => (0x0000, 0x0000),
    "Lacute" => (0x0000, 0x0000),
    "Lacute;" => (0x0139, 0x0000),
    "Lam" => (0x0000, 0x0000),
    "Lamb" => (0x0000, 0x0000),
    "Lambd" => (0x0000, 0x0000),
    "Lambda" => (0x0000, 0x0000),
    "Lambda;" => (0x039B, 0x0000),
    "Lan" => (0x0000, 0x0000),
    "Lang" => (0x0000, 0x0000),
    "Lang;" => (0x27EA, 0x0000),
    "Lap" => (0x0000, 0x0000),
    "Lapl" => (0x0000, 0x0000),
    "Lapla" => (0x0000, 0x0000),
    "Laplac" => (0x0000, 0x0000),
    "Laplace" => (0x0000, 0x0000),
    "Laplacet" => (0x0000, 0x0000),
    "Laplacetr" => (0x0000, 0x0000),
    "Laplacetrf" => (0x0000, 0x0000),
    "Laplacetrf;" => (0x2112, 0x0000),
    "Lar" => (0x0000, 0x0000),
    "Larr" => (0x0000, 0x0000),
    "Larr;" => (0x219E, 0x0000),
    "Lc" => (0x0000, 0x0000),
    "Lca" => (0x0000, 0x0000),
    "Lcar" => (0x0000, 0x0000),
    "Lcaro" => (0x0000, 0x0000),
    "Lcaron" => (0x0000, 0x0000),
    "Lcaron;" => (0x013D, 0x0000),
    "Lce" => (0x0000, 0x0000),
    "Lced" => (0x0000, 0x0000),
    "Lcedi" => (0x0000, 0x0000),
    "Lcedil" => (0x0000, 0x0000),
    "Lcedil;" => (0x013B, 0x0000),
    "Lcy" => (0x0000, 0x0000),
    "Lcy;" => (0x041B, 0x0000),
    "Le" => (0x0000, 0x0000),
    "Lef" => (0x0000, 0x0000),
    "Left" => (0x0000, 0x0000),
    "LeftA" => (0x0000, 0x0000),
    "LeftAn" => (0x0000, 0x0000),
    "LeftAng" => (0x0000, 0x0000),
    "LeftAngl" => (0x0000, 0x0000),
    "LeftAngle" => (0x0000, 0x0000),
    "LeftAngleB" => (0x0000, 0x0000),
    "LeftAngleBr" => (0x0000, 0x0000),
    "LeftAngleBra" => (0x0000, 0x0000),
    "LeftAngleBrac" => (0x0000, 0x0000),
    "LeftAngleBrack" => (0x0000, 0x0000),
    "LeftAngleBracke" => (0x0000, 0x0000),
    "LeftAngleBracket" => (0x0000, 0x0000),
    "LeftAngleBracket;" => (0x27E8, 0x0000),
    "LeftAr" => (0x0000, 0x0000),
    "LeftArr" => (0x0000, 0x0000),
    "LeftArro" => (0x0000, 0x0000),
    "LeftArrow" => (0x0000, 0x0000),
    "LeftArrow;" => (0x2190, 0x0000),
    "LeftArrowB" => (0x0000, 0x0000),
    "LeftArrowBa" => (0x0000, 0x0000),
    "LeftArrowBar" => (0x0000, 0x0000),
    "LeftArrowBar;" => (0x21E4, 0x0000),
    "LeftArrowR" => (0x0000, 0x0000),
    "LeftArrowRi" => (0x0000, 0x0000),
    "LeftArrowRig" => (0x0000, 0x0000),
    "LeftArrowRigh" => (0x0000, 0x0000),
    "LeftArrowRight" => (0x0000, 0x0000),
    "LeftArrowRightA" => (0x0000, 0x0000),
    "LeftArrowRightAr" => (0x0000, 0x0000),
    "LeftArrowRightArr" => (0x0000, 0x0000),
    "LeftArrowRightArro" => (0x0000, 0x0000),
    "LeftArrowRightArrow" => (0x0000, 0x0000),
    "LeftArrowRightArrow;" => (0x21C6, 0x0000),
    "LeftC" => (0x0000, 0x0000),
    "LeftCe" => (0x0000, 0x0000),
    "LeftCei" => (0x0000, 0x0000),
    "LeftCeil" => (0x0000, 0x0000),
    "LeftCeili" => (0x0000, 0x0000),
    "LeftCeilin" => (0x0000, 0x0000),
    "LeftCeiling" => (0x0000, 0x0000),
    "LeftCeiling;" => (0x2308, 0x0000),
    "LeftD" => (0x0000, 0x0000),
    "LeftDo" => (0x0000, 0x0000),
    "LeftDou" => (0x0000, 0x0000),
    "LeftDoub" => (0x0000, 0x0000),
    "LeftDoubl" => (0x0000, 0x0000),
    "LeftDouble" => (0x0000, 0x0000),
    "LeftDoubleB" => (0x0000, 0x0000),
    "LeftDoubleBr" => (0x0000, 0x0000),
    "LeftDoubleBra" => (0x0000, 0x0000),
    "LeftDoubleBrac" => (0x0000, 0x0000),
    "LeftDoubleBrack" => (0x0000, 0x0000),
    "LeftDoubleBracke" => (0x0000, 0x0000),
    "LeftDoubleBracket" => (0x0000, 0x0000),
    "LeftDoubleBracket;" => (0x27E6, 0x0000),
    "LeftDow" => (0x0000, 0x0000),
    "LeftDown" => (0x0000, 0x0000),
    "LeftDownT" => (0x0000, 0x0000),
    "LeftDownTe" => (0x0000, 0x0000),
    "LeftDownTee" => (0x0000, 0x0000),
    "LeftDownTeeV" => (0x0000, 0x0000),
    "LeftDownTeeVe" => (0x0000, 0x0000),
    "LeftDownTeeVec" => (0x0000, 0x0000),
    "LeftDownTeeVect" => (0x0000, 0x0000),
    "LeftDownTeeVecto" => (0x0000, 0x0000),
    "LeftDownTeeVector" => (0x0000, 0x0000),
    "LeftDownTeeVector;" => (0x2961, 0x0000),
    "LeftDownV" => (0x0000, 0x0000),
    "LeftDownVe" => (0x0000, 0x0000),
    "LeftDownVec" => (0x0000, 0x0000),
    "LeftDownVect" => (0x0000, 0x0000),
    "LeftDownVecto" => (0x0000, 0x0000),
    "LeftDownVector" => (0x0000, 0x0000),
    "LeftDownVector;" => (0x21C3, 0x0000),
    "LeftDownVectorB" => (0x0000, 0x0000),
    "LeftDownVectorBa" => (0x0000, 0x0000),
    "LeftDownVectorBar" => (0x0000, 0x0000),
    "LeftDownVectorBar;" => (0x2959, 0x0000),
    "LeftF" => (0x0000, 0x0000),
    "LeftFl" => (0x0000, 0x0000),
    "LeftFlo" => (0x0000, 0x0000),
    "LeftFloo" => (0x0000, 0x0000),
    "LeftFloor" => (0x0000, 0x0000),
    "LeftFloor;" => (0x230A, 0x0000),
    "LeftR" => (0x0000, 0x0000),
    "LeftRi" => (0x0000, 0x0000),
    "LeftRig" => (0x0000, 0x0000),
    "LeftRigh" => (0x0000, 0x0000),
    "LeftRight" => (0x0000, 0x0000),
    "LeftRightA" => (0x0000, 0x0000),
    "LeftRightAr" => (0x0000, 0x0000),
    "LeftRightArr" => (0x0000, 0x0000),
    "LeftRightArro" => (0x0000, 0x0000),
    "LeftRightArrow" => (0x0000, 0x0000),
    "LeftRightArrow;" => (0x2194, 0x0000),
    "LeftRightV" => (0x0000, 0x0000),
    "LeftRightVe" => (0x0000, 0x0000),
    "LeftRightVec" => (0x0000, 0x0000),
    "LeftRightVect" => (0x0000, 0x0000),
    "LeftRightVecto" => (0x0000, 0x0000),
    "LeftRightVector" => (0x0000, 0x0000),
    "LeftRightVector;" => (0x294E, 0x0000),
    "LeftT" => (0x0000, 0x0000),
    "LeftTe" => (0x0000, 0x0000),
    "LeftTee" => (0x0000, 0x0000),
    "LeftTee;" => (0x22A3, 0x0000),
    "LeftTeeA" => (0x0000, 0x0000),
    "LeftTeeAr" => (0x0000, 0x0000),
    "LeftTeeArr" => (0x0000, 0x0000),
    "LeftTeeArro" => (0x0000, 0x0000),
    "LeftTeeArrow" => (0x0000, 0x0000),
    "LeftTeeArrow;" => (0x21A4, 0x0000),
    "LeftTeeV" => (0x0000, 0x0000),
    "LeftTeeVe" => (0x0000, 0x0000),
    "LeftTeeVec" => (0x0000, 0x0000),
    "LeftTeeVect" => (0x0000, 0x0000),
    "LeftTeeVecto" => (0x0000, 0x0000),
    "LeftTeeVector" => (0x0000, 0x0000),
    "LeftTeeVector;" => (0x295A, 0x0000),
    "LeftTr" => (0x0000, 0x0000),
    "LeftTri" => (0x0000, 0x0000),
    "LeftTria" => (0x0000, 0x0000),
    "LeftTrian" => (0x0000, 0x0000),
    "LeftTriang" => (0x0000, 0x0000),
    "LeftTriangl" => (0x0000, 0x0000),
    "LeftTriangle" => (0x0000, 0x0000),
    "LeftTriangle;" => (0x22B2, 0x0000),
    "LeftTriangleB" => (0x0000, 0x0000),
    "LeftTriangleBa" => (0x0000, 0x0000),
    "LeftTriangleBar" => (0x0000, 0x0000),
    "LeftTriangleBar;" => (0x29CF, 0x0000),
    "LeftTriangleE" => (0x0000, 0x0000),
    "LeftTriangleEq" => (0x0000, 0x0000),
    "LeftTriangleEqu" => (0x0000, 0x0000),
    "LeftTriangleEqua" => (0x0000, 0x0000),
    "LeftTriangleEqual" => (0x0000, 0x0000),
    "LeftTriangleEqual;" => (0x22B4, 0x0000),
    "LeftU" => (0x0000, 0x0000),
    "LeftUp" => (0x0000, 0x0000),
    "LeftUpD" => (0x0000, 0x0000),
    "LeftUpDo" => (0x0000, 0x0000),
    "LeftUpDow" => (0x0000, 0x0000),
    "LeftUpDown" => (0x0000, 0x0000),
    "LeftUpDownV" => (0x0000, 0x0000),
    "LeftUpDownVe" => (0x0000, 0x0000),
    "LeftUpDownVec" => (0x0000, 0x0000),
    "LeftUpDownVect" => (0x0000, 0x0000),
    "LeftUpDownVecto" => (0x0000, 0x0000),
    "LeftUpDownVector" => (0x0000, 0x0000),
    "LeftUpDownVector;" => (0x2951, 0x0000),
    "LeftUpT" => (0x0000, 0x0000),
    "LeftUpTe" => (0x0000, 0x0000),
    "LeftUpTee" => (0x0000, 0x0000),
    "LeftUpTeeV" => (0x0000, 0x0000),
    "LeftUpTeeVe" => (0x0000, 0x0000),
    "LeftUpTeeVec" => (0x0000, 0x0000),
    "LeftUpTeeVect" => (0x0000, 0x0000),
    "LeftUpTeeVecto" => (0x0000, 0x0000),
    "LeftUpTeeVector" => (0x0000, 0x0000),
    "LeftUpTeeVector;" => (0x2960, 0x0000),
    "LeftUpV" => (0x0000, 0x0000),
    "LeftUpVe" => (0x0000, 0x0000),
    "LeftUpVec" => (0x0000, 0x0000),
    "LeftUpVect" => (0x0000, 0x0000),
    "LeftUpVecto" => (0x0000, 0x0000),
    "LeftUpVector" => (0x0000, 0x0000),
    "LeftUpVector;" => (0x21BF, 0x0000),
    "LeftUpVectorB" => (0x0000, 0x0000),
    "LeftUpVectorBa" => (0x0000, 0x0000),
    "LeftUpVectorBar" => (0x0000, 0x0000),
    "LeftUpVectorBar;" => (0x2958, 0x0000),
    "LeftV" => (0x0000, 0x0000),
    "LeftVe" => (0x0000, 0x0000),
    "LeftVec" => (0x0000, 0x0000),
    "LeftVect" => (0x0000, 0x0000),
    "LeftVecto" => (0x0000, 0x0000),
    "LeftVector" => (0x0000, 0x0000),
    "LeftVector;" => (0x21BC, 0x0000),
    "LeftVectorB" => (0x0000, 0x0000),
    "LeftVectorBa" => (0x0000, 0x0000),
    "LeftVectorBar" => (0x0000, 0x0000),
    "LeftVectorBar;" => (0x2952, 0x0000),
    "Lefta" => (0x0000, 0x0000),
    "Leftar" => (0x0000, 0x0000),
    "Leftarr" => (0x0000, 0x0000),
    "Leftarro" => (0x0000, 0x0000),
    "Leftarrow" => (0x0000, 0x0000),
    "Leftarrow;" => (0x21D0, 0x0000),
    "Leftr" => (0x0000, 0x0000),
    "Leftri" => (0x0000, 0x0000),
    "Leftrig" => (0x0000, 0x0000),
    "Leftrigh" => (0x0000, 0x0000),
    "Leftright" => (0x0000, 0x0000),
    "Leftrighta" => (0x0000, 0x0000),
    "Leftrightar" => (0x0000, 0x0000),
    "Leftrightarr" => (0x0000, 0x0000),
    "Leftrightarro" => (0x0000, 0x0000),
    "Leftrightarrow" => (0x0000, 0x0000),
    "Leftrightarrow;" => (0x21D4, 0x0000),
    "Les" => (0x0000, 0x0000),
    "Less" => (0x0000, 0x0000),
    "LessE" => (0x0000, 0x0000),
    "LessEq" => (0x0000, 0x0000),
    "LessEqu" => (0x0000, 0x0000),
    "LessEqua" => (0x0000, 0x0000),
    "LessEqual" => (0x0000, 0x0000),
    "LessEqualG" => (0x0000, 0x0000),
    "LessEqualGr" => (0x0000, 0x0000),
    "LessEqualGre" => (0x0000, 0x0000),
    "LessEqualGrea" => (0x0000, 0x0000),
    "LessEqualGreat" => (0x0000, 0x0000),
    "LessEqualGreate" => (0x0000, 0x0000),
    "LessEqualGreater" => (0x0000, 0x0000),
    "LessEqualGreater;" => (0x22DA, 0x0000),
    "LessF" => (0x0000, 0x0000),
    "LessFu" => (0x0000, 0x0000),
    "LessFul" => (0x0000, 0x0000),
    "LessFull" => (0x0000, 0x0000),
    "LessFullE" => (0x0000, 0x0000),
    "LessFullEq" => (0x0000, 0x0000),
    "LessFullEqu" => (0x0000, 0x0000),
    "LessFullEqua" => (0x0000, 0x0000),
    "LessFullEqual" => (0x0000, 0x0000),
    "LessFullEqual;" => (0x2266, 0x0000),
    "LessG" => (0x0000, 0x0000),
    "LessGr" => (0x0000, 0x0000),
    "LessGre" => (0x0000, 0x0000),
    "LessGrea" => (0x0000, 0x0000),
    "LessGreat" => (0x0000, 0x0000),
    "LessGreate" => (0x0000, 0x0000),
    "LessGreater" => (0x0000, 0x0000),
    "LessGreater;" => (0x2276, 0x0000),
    "LessL" => (0x0000, 0x0000),
    "LessLe" => (0x0000, 0x0000),
    "LessLes" => (0x0000, 0x0000),
    "LessLess" => (0x0000, 0x0000),
    "LessLess;" => (0x2AA1, 0x0000),
    "LessS" => (0x0000, 0x0000),
    "LessSl" => (0x0000, 0x0000),
    "LessSla" => (0x0000, 0x0000),
    "LessSlan" => (0x0000, 0x0000),
    "LessSlant" => (0x0000, 0x0000),
    "LessSlantE" => (0x0000, 0x0000),
    "LessSlantEq" => (0x0000, 0x0000),
    "LessSlantEqu" => (0x0000, 0x0000),
    "LessSlantEqua" => (0x0000, 0x0000),
    "LessSlantEqual" => (0x0000, 0x0000),
    "LessSlantEqual;" => (0x2A7D, 0x0000),
    "LessT" => (0x0000, 0x0000),
    "LessTi" => (0x0000, 0x0000),
    "LessTil" => (0x0000, 0x0000),
    "LessTild" => (0x0000, 0x0000),
    "LessTilde" => (0x0000, 0x0000),
    "LessTilde;" => (0x2272, 0x0000),
    "Lf" => (0x0000, 0x0000),
    "Lfr" => (0x0000, 0x0000),
    "Lfr;" => (0x1D50F, 0x0000),
    "Ll" => (0x0000, 0x0000),
    "Ll;" => (0x22D8, 0x0000),
    "Lle" => (0x0000, 0x0000),
    "Llef" => (0x0000, 0x0000),
    "Lleft" => (0x0000, 0x0000),
    "Llefta" => (0x0000, 0x0000),
    "Lleftar" => (0x0000, 0x0000),
    "Lleftarr" => (0x0000, 0x0000),
    "Lleftarro" => (0x0000, 0x0000),
    "Lleftarrow" => (0x0000, 0x0000),
    "Lleftarrow;" => (0x21DA, 0x0000),
    "Lm" => (0x0000, 0x0000),
    "Lmi" => (0x0000, 0x0000),
    "Lmid" => (0x0000, 0x0000),
    "Lmido" => (0x0000, 0x0000),
    "Lmidot" => (0x0000, 0x0000),
    "Lmidot;" => (0x013F, 0x0000),
    "Lo" => (0x0000, 0x0000),
    "Lon" => (0x0000, 0x0000),
    "Long" => (0x0000, 0x0000),
    "LongL" => (0x0000, 0x0000),
    "LongLe" => (0x0000, 0x0000),
    "LongLef" => (0x0000, 0x0000),
    "LongLeft" => (0x0000, 0x0000),
    "LongLeftA" => (0x0000, 0x0000),
    "LongLeftAr" => (0x0000, 0x0000),
    "LongLeftArr" => (0x0000, 0x0000),
    "LongLeftArro" => (0x0000, 0x0000),
    "LongLeftArrow" => (0x0000, 0x0000),
    "LongLeftArrow;" => (0x27F5, 0x0000),
    "LongLeftR" => (0x0000, 0x0000),
    "LongLeftRi" => (0x0000, 0x0000),
    "LongLeftRig" => (0x0000, 0x0000),
    "LongLeftRigh" => (0x0000, 0x0000),
    "LongLeftRight" => (0x0000, 0x0000),
    "LongLeftRightA" => (0x0000, 0x0000),
    "LongLeftRightAr" => (0x0000, 0x0000),
    "LongLeftRightArr" => (0x0000, 0x0000),
    "LongLeftRightArro" => (0x0000, 0x0000),
    "LongLeftRightArrow" => (0x0000, 0x0000),
    "LongLeftRightArrow;" => (0x27F7, 0x0000),
    "LongR" => (0x0000, 0x0000),
    "LongRi" => (0x0000, 0x0000),
    "LongRig" => (0x0000, 0x0000),
    "LongRigh" => (0x0000, 0x0000),
    "LongRight" => (0x0000, 0x0000),
    "LongRightA" => (0x0000, 0x0000),
    "LongRightAr" => (0x0000, 0x0000),
    "LongRightArr" => (0x0000, 0x0000),
    "LongRightArro" => (0x0000, 0x0000),
    "LongRightArrow" => (0x0000, 0x0000),
    "LongRightArrow;" => (0x27F6, 0x0000),
    "Longl" => (0x0000, 0x0000),
    "Longle" => (0x0000, 0x0000),
    "Longlef" => (0x0000, 0x0000),
    "Longleft" => (0x0000, 0x0000),
    "Longlefta" => (0x0000, 0x0000),
    "Longleftar" => (0x0000, 0x0000),
    "Longleftarr" => (0x0000, 0x0000),
    "Longleftarro" => (0x0000, 0x0000),
    "Longleftarrow" => (0x0000, 0x0000),
    "Longleftarrow;" => (0x27F8, 0x0000),
    "Longleftr" => (0x0000, 0x0000),
    "Longleftri" => (0x0000, 0x0000),
    "Longleftrig" => (0x0000, 0x0000),
    "Longleftrigh" => (0x0000, 0x0000),
    "Longleftright" => (0x0000, 0x0000),
    "Longleftrighta" => (0x0000, 0x0000),
    "Longleftrightar" => (0x0000, 0x0000),
    "Longleftrightarr" => (0x0000, 0x0000),
    "Longleftrightarro" => (0x0000, 0x0000),
    "Longleftrightarrow" => (0x0000, 0x0000),
    "Longleftrightarrow;" => (0x27FA, 0x0000),
    "Longr" => (0x0000, 0x0000),
    "Longri" => (0x0000, 0x0000),
    "Longrig" => (0x0000, 0x0000),
    "Longrigh" => (0x0000, 0x0000),
    "Longright" => (0x0000, 0x0000),
    "Longrighta" => (0x0000, 0x0000),
    "Longrightar" => (0x0000, 0x0000),
    "Longrightarr" => (0x0000, 0x0000),
    "Longrightarro" => (0x0000, 0x0000),
    "Longrightarrow" => (0x0000, 0x0000),
    "Longrightarrow;" => (0x27F9, 0x0000),
    "Lop" => (0x0000, 0x0000),
    "Lopf" => (0x0000, 0x0000),
    "Lopf;" => (0x1D543, 0x0000),
    "Low" => (0x0000, 0x0000),
    "Lowe" => (0x0000, 0x0000),
    "Lower" => (0x0000, 0x0000),
    "LowerL" => (0x0000, 0x0000),
    "LowerLe" => (0x0000, 0x0000),
    "LowerLef" => (0x0000, 0x0000),
    "LowerLeft" => (0x0000, 0x0000),
    "LowerLeftA" => (0x0000, 0x0000),
    "LowerLeftAr" => (0x0000, 0x0000),
    "LowerLeftArr" => (0x0000, 0x0000),
    "LowerLeftArro" => (0x0000, 0x0000),
    "LowerLeftArrow" => (0x0000, 0x0000),
    "LowerLeftArrow;" => (0x2199, 0x0000),
    "LowerR" => (0x0000, 0x0000),
    "LowerRi" => (0x0000, 0x0000),
    "LowerRig" => (0x0000, 0x0000),
    "LowerRigh" => (0x0000, 0x0000),
    "LowerRight" => (0x0000, 0x0000),
    "LowerRightA" => (0x0000, 0x0000),
    "LowerRightAr" => (0x0000, 0x0000),
    "LowerRightArr" => (0x0000, 0x0000),
    "LowerRightArro" => (0x0000, 0x0000),
    "LowerRightArrow" => (0x0000, 0x0000),
    "LowerRightArrow;" => (0x2198, 0x0000),
    "Ls" => (0x0000, 0x0000),
    "Lsc" => (0x0000, 0x0000),
    "Lscr" => (0x0000, 0x0000),
    "Lscr;" => (0x2112, 0x0000),
    "Lsh" => (0x0000, 0x0000),
    "Lsh;" => (0x21B0, 0x0000),
    "Lst" => (0x0000, 0x0000),
    "Lstr" => (0x0000, 0x0000),
    "Lstro" => (0x0000, 0x0000),
    "Lstrok" => (0x0000, 0x0000),
    "Lstrok;" => (0x0141, 0x0000),
    "Lt" => (0x0000, 0x0000),
    "Lt;" => (0x226A, 0x0000),
    "M" => (0x0000, 0x0000),
    "Ma" => (0x0000, 0x0000),
    "Map" => (0x0000, 0x0000),
    "Map;" => (0x2905, 0x0000),
    "Mc" => (0x0000, 0x0000),
    "Mcy" => (0x0000, 0x0000),
    "Mcy;" => (0x041C, 0x0000),
    "Me" => (0x0000, 0x0000),
    "Med" => (0x0000, 0x0000),
    "Medi" => (0x0000, 0x0000),
    "Mediu" => (0x0000, 0x0000),
    "Medium" => (0x0000, 0x0000),
    "MediumS" => (0x0000, 0x0000),
    "MediumSp" => (0x0000, 0x0000),
    "MediumSpa" => (0x0000, 0x0000),
    "MediumSpac" => (0x0000, 0x0000),
    "MediumSpace" => (0x0000, 0x0000),
    "MediumSpace;" => (0x205F, 0x0000),
    "Mel" => (0x0000, 0x0000),
    "Mell" => (0x0000, 0x0000),
    "Melli" => (0x0000, 0x0000),
    "Mellin" => (0x0000, 0x0000),
    "Mellint" => (0x0000, 0x0000),
    "Mellintr" => (0x0000, 0x0000),
    "Mellintrf" => (0x0000, 0x0000),
    "Mellintrf;" => (0x2133, 0x0000),
    "Mf" => (0x0000, 0x0000),
    "Mfr" => (0x0000, 0x0000),
    "Mfr;" => (0x1D510, 0x0000),
    "Mi" => (0x0000, 0x0000),
    "Min" => (0x0000, 0x0000),
    "Minu" => (0x0000, 0x0000),
    "Minus" => (0x0000, 0x0000),
    "MinusP" => (0x0000, 0x0000),
    "MinusPl" => (0x0000, 0x0000),
    "MinusPlu" => (0x0000, 0x0000),
    "MinusPlus" => (0x0000, 0x0000),
    "MinusPlus;" => (0x2213, 0x0000),
    "Mo" => (0x0000, 0x0000),
    "Mop" => (0x0000, 0x0000),
    "Mopf" => (0x0000, 0x0000),
    "Mopf;" => (0x1D544, 0x0000),
    "Ms" => (0x0000, 0x0000),
    "Msc" => (0x0000, 0x0000),
    "Mscr" => (0x0000, 0x0000),
    "Mscr;" => (0x2133, 0x0000),
    "Mu" => (0x0000, 0x0000),
    "Mu;" => (0x039C, 0x0000),
    "N" => (0x0000, 0x0000),
    "NJ" => (0x0000, 0x0000),
    "NJc" => (0x0000, 0x0000),
    "NJcy" => (0x0000, 0x0000),
    "NJcy;" => (0x040A, 0x0000),
    "Na" => (0x0000, 0x0000),
    "Nac" => (0x0000, 0x0000),
    "Nacu" => (0x0000, 0x0000),
    "Nacut" => (0x0000, 0x0000),
    "Nacute" => (0x0000, 0x0000),
    "Nacute;" => (0x0143, 0x0000),
    "Nc" => (0x0000, 0x0000),
    "Nca" => (0x0000, 0x0000),
    "Ncar" => (0x0000, 0x0000),
    "Ncaro" => (0x0000, 0x0000),
    "Ncaron" => (0x0000, 0x0000),
    "Ncaron;" => (0x0147, 0x0000),
    "Nce" => (0x0000, 0x0000),
    "Nced" => (0x0000, 0x0000),
    "Ncedi" => (0x0000, 0x0000),
    "Ncedil" => (0x0000, 0x0000),
    "Ncedil;" => (0x0145, 0x0000),
    "Ncy" => (0x0000, 0x0000),
    "Ncy;" => (0x041D, 0x0000),
    "Ne" => (0x0000, 0x0000),
    "Neg" => (0x0000, 0x0000),
    "Nega" => (0x0000, 0x0000),
    "Negat" => (0x0000, 0x0000),
    "Negati" => (0x0000, 0x0000),
    "Negativ" => (0x0000, 0x0000),
    "Negative" => (0x0000, 0x0000),
    "NegativeM" => (0x0000, 0x0000),
    "NegativeMe" => (0x0000, 0x0000),
    "NegativeMed" => (0x0000, 0x0000),
    "NegativeMedi" => (0x0000, 0x0000),
    "NegativeMediu" => (0x0000, 0x0000),
    "NegativeMedium" => (0x0000, 0x0000),
    "NegativeMediumS" => (0x0000, 0x0000),
    "NegativeMediumSp" => (0x0000, 0x0000),
    "NegativeMediumSpa" => (0x0000, 0x0000),
    "NegativeMediumSpac" => (0x0000, 0x0000),
    "NegativeMediumSpace" => (0x0000, 0x0000),
    "NegativeMediumSpace;" => (0x200B, 0x0000),
    "NegativeT" => (0x0000, 0x0000),
    "NegativeTh" => (0x0000, 0x0000),
    "NegativeThi" => (0x0000, 0x0000),
    "NegativeThic" => (0x0000, 0x0000),
    "NegativeThick" => (0x0000, 0x0000),
    "NegativeThickS" => (0x0000, 0x0000),
    "NegativeThickSp" => (0x0000, 0x0000),
    "NegativeThickSpa" => (0x0000, 0x0000),
    "NegativeThickSpac" => (0x0000, 0x0000),
    "NegativeThickSpace" => (0x0000, 0x0000),
    "NegativeThickSpace;" => (0x200B, 0x0000),
    "NegativeThin" => (0x0000, 0x0000),
    "NegativeThinS" => (0x0000, 0x0000),
    "NegativeThinSp" => (0x0000, 0x0000),
    "NegativeThinSpa" => (0x0000, 0x0000),
    "NegativeThinSpac" => (0x0000, 0x0000),
    "NegativeThinSpace" => (0x0000, 0x0000),
    "NegativeThinSpace;" => (0x200B, 0x0000),
    "NegativeV" => (0x0000, 0x0000),
    "NegativeVe" => (0x0000, 0x0000),
    "NegativeVer" => (0x0000, 0x0000),
    "NegativeVery" => (0x0000, 0x0000),
    "NegativeVeryT" => (0x0000, 0x0000),
    "NegativeVeryTh" => (0x0000, 0x0000),
    "NegativeVeryThi" => (0x0000, 0x0000),
    "NegativeVeryThin" => (0x0000, 0x0000),
    "NegativeVeryThinS" => (0x0000, 0x0000),
    "NegativeVeryThinSp" => (0x0000, 0x0000),
    "NegativeVeryThinSpa" => (0x0000, 0x0000),
    "NegativeVeryThinSpac" => (0x0000, 0x0000),
    "NegativeVeryThinSpace" => (0x0000, 0x0000),
    "NegativeVeryThinSpace;" => (0x200B, 0x0000),
    "Nes" => (0x0000, 0x0000),
    "Nest" => (0x0000, 0x0000),
    "Neste" => (0x0000, 0x0000),
    "Nested" => (0x0000, 0x0000),
    "NestedG" => (0x0000, 0x0000),
    "NestedGr" => (0x0000, 0x0000),
    "NestedGre" => (0x0000, 0x0000),
    "NestedGrea" => (0x0000, 0x0000),
    "NestedGreat" => (0x0000, 0x0000),
    "NestedGreate" => (0x0000, 0x0000),
    "NestedGreater" => (0x0000, 0x0000),
    "NestedGreaterG" => (0x0000, 0x0000),
    "NestedGreaterGr" => (0x0000, 0x0000),
    "NestedGreaterGre" => (0x0000, 0x0000),
    "NestedGreaterGrea" => (0x0000, 0x0000),
    "NestedGreaterGreat" => (0x0000, 0x0000),
    "NestedGreaterGreate" => (0x0000, 0x0000),
    "NestedGreaterGreater" => (0x0000, 0x0000),
    "NestedGreaterGreater;" => (0x226B, 0x0000),
    "NestedL" => (0x0000, 0x0000),
    "NestedLe" => (0x0000, 0x0000),
    "NestedLes" => (0x0000, 0x0000),
    "NestedLess" => (0x0000, 0x0000),
    "NestedLessL" => (0x0000, 0x0000),
    "NestedLessLe" => (0x0000, 0x0000),
    "NestedLessLes" => (0x0000, 0x0000),
    "NestedLessLess" => (0x0000, 0x0000),
    "NestedLessLess;" => (0x226A, 0x0000),
    "New" => (0x0000, 0x0000),
    "NewL" => (0x0000, 0x0000),
    "NewLi" => (0x0000, 0x0000),
    "NewLin" => (0x0000, 0x0000),
    "NewLine" => (0x0000, 0x0000),
    "NewLine;" => (0x000A, 0x0000),
    "Nf" => (0x0000, 0x0000),
    "Nfr" => (0x0000, 0x0000),
    "Nfr;" => (0x1D511, 0x0000),
    "No" => (0x0000, 0x0000),
    "NoB" => (0x0000, 0x0000),
    "NoBr" => (0x0000, 0x0000),
    "NoBre" => (0x0000, 0x0000),
    "NoBrea" => (0x0000, 0x0000),
    "NoBreak" => (0x0000, 0x0000),
    "NoBreak;" => (0x2060, 0x0000),
    "Non" => (0x0000, 0x0000),
    "NonB" => (0x0000, 0x0000),
    "NonBr" => (0x0000, 0x0000),
    "NonBre" => (0x0000, 0x0000),
    "NonBrea" => (0x0000, 0x0000),
    "NonBreak" => (0x0000, 0x0000),
    "NonBreaki" => (0x0000, 0x0000),
    "NonBreakin" => (0x0000, 0x0000),
    "NonBreaking" => (0x0000, 0x0000),
    "NonBreakingS" => (0x0000, 0x0000),
    "NonBreakingSp" => (0x0000, 0x0000),
    "NonBreakingSpa" => (0x0000, 0x0000),
    "NonBreakingSpac" => (0x0000, 0x0000),
    "NonBreakingSpace" => (0x0000, 0x0000),
    "NonBreakingSpace;" => (0x00A0, 0x0000),
    "Nop" => (0x0000, 0x0000),
    "Nopf" => (0x0000, 0x0000),
    "Nopf;" => (0x2115, 0x0000),
    "Not" => (0x0000, 0x0000),
    "Not;" => (0x2AEC, 0x0000),
    "NotC" => (0x0000, 0x0000),
    "NotCo" => (0x0000, 0x0000),
    "NotCon" => (0x0000, 0x0000),
    "NotCong" => (0x0000, 0x0000),
    "NotCongr" => (0x0000, 0x0000),
    "NotCongru" => (0x0000, 0x0000),
    "NotCongrue" => (0x0000, 0x0000),
    "NotCongruen" => (0x0000, 0x0000),
    "NotCongruent" => (0x0000, 0x0000),
    "NotCongruent;" => (0x2262, 0x0000),
    "NotCu" => (0x0000, 0x0000),
    "NotCup" => (0x0000, 0x0000),
    "NotCupC" => (0x0000, 0x0000),
    "NotCupCa" => (0x0000, 0x0000),
    "NotCupCap" => (0x0000, 0x0000),
    "NotCupCap;" => (0x226D, 0x0000),
    "NotD" => (0x0000, 0x0000),
    "NotDo" => (0x0000, 0x0000),
    "NotDou" => (0x0000, 0x0000),
    "NotDoub" => (0x0000, 0x0000),
    "NotDoubl" => (0x0000, 0x0000),
    "NotDouble" => (0x0000, 0x0000),
    "NotDoubleV" => (0x0000, 0x0000),
    "NotDoubleVe" => (0x0000, 0x0000),
    "NotDoubleVer" => (0x0000, 0x0000),
    "NotDoubleVert" => (0x0000, 0x0000),
    "NotDoubleVerti" => (0x0000, 0x0000),
    "NotDoubleVertic" => (0x0000, 0x0000),
    "NotDoubleVertica" => (0x0000, 0x0000),
    "NotDoubleVertical" => (0x0000, 0x0000),
    "NotDoubleVerticalB" => (0x0000, 0x0000),
    "NotDoubleVerticalBa" => (0x0000, 0x0000),
    "NotDoubleVerticalBar" => (0x0000, 0x0000),
    "NotDoubleVerticalBar;" => (0x2226, 0x0000),
    "NotE" => (0x0000, 0x0000),
    "NotEl" => (0x0000, 0x0000),
    "NotEle" => (0x0000, 0x0000),
    "NotElem" => (0x0000, 0x0000),
    "NotEleme" => (0x0000, 0x0000),
    "NotElemen" => (0x0000, 0x0000),
    "NotElement" => (0x0000, 0x0000),
    "NotElement;" => (0x2209, 0x0000),
    "NotEq" => (0x0000, 0x0000),
    "NotEqu" => (0x0000, 0x0000),
    "NotEqua" => (0x0000, 0x0000),
    "NotEqual" => (0x0000, 0x0000),
    "NotEqual;" => (0x2260, 0x0000),
    "NotEqualT" => (0x0000, 0x0000),
    "NotEqualTi" => (0x0000, 0x0000),
    "NotEqualTil" => (0x0000, 0x0000),
    "NotEqualTild" => (0x0000, 0x0000),
    "NotEqualTilde" => (0x0000, 0x0000),
    "NotEqualTilde;" => (0x2242, 0x0338),
    "NotEx" => (0x0000, 0x0000),
    "NotExi" => (0x0000, 0x0000),
    "NotExis" => (0x0000, 0x0000),
    "NotExist" => (0x0000, 0x0000),
    "NotExists" => (0x0000, 0x0000),
    "NotExists;" => (0x2204, 0x0000),
    "NotG" => (0x0000, 0x0000),
    "NotGr" => (0x0000, 0x0000),
    "NotGre" => (0x0000, 0x0000),
    "NotGrea" => (0x0000, 0x0000),
    "NotGreat" => (0x0000, 0x0000),
    "NotGreate" => (0x0000, 0x0000),
    "NotGreater" => (0x0000, 0x0000),
    "NotGreater;" => (0x226F, 0x0000),
    "NotGreaterE" => (0x0000, 0x0000),
    "NotGreaterEq" => (0x0000, 0x0000),
    "NotGreaterEqu" => (0x0000, 0x0000),
    "NotGreaterEqua" => (0x0000, 0x0000),
    "NotGreaterEqual" => (0x0000, 0x0000),
    "NotGreaterEqual;" => (0x2271, 0x0000),
    "NotGreaterF" => (0x0000, 0x0000),
    "NotGreaterFu" => (0x0000, 0x0000),
    "NotGreaterFul" => (0x0000, 0x0000),
    "NotGreaterFull" => (0x0000, 0x0000),
    "NotGreaterFullE" => (0x0000, 0x0000),
    "NotGreaterFullEq" => (0x0000, 0x0000),
    "NotGreaterFullEqu" => (0x0000, 0x0000),
    "NotGreaterFullEqua" => (0x0000, 0x0000),
    "NotGreaterFullEqual" => (0x0000, 0x0000),
    "NotGreaterFullEqual;" => (0x2267, 0x0338),
    "NotGreaterG" => (0x0000, 0x0000),
    "NotGreaterGr" => (0x0000, 0x0000),
    "NotGreaterGre" => (0x0000, 0x0000),
    "NotGreaterGrea" => (0x0000, 0x0000),
    "NotGreaterGreat" => (0x0000, 0x0000),
    "NotGreaterGreate" => (0x0000, 0x0000),
    "NotGreaterGreater" => (0x0000, 0x0000),
    "NotGreaterGreater;" => (0x226B, 0x0338),
    "NotGreaterL" => (0x0000, 0x0000),
    "NotGreaterLe" => (0x0000, 0x0000),
    "NotGreaterLes" => (0x0000, 0x0000),
    "NotGreaterLess" => (0x0000, 0x0000),
    "NotGreaterLess;" => (0x2279, 0x0000),
    "NotGreaterS" => (0x0000, 0x0000),
    "NotGreaterSl" => (0x0000, 0x0000),
    "NotGreaterSla" => (0x0000, 0x0000),
    "NotGreaterSlan" => (0x0000, 0x0000),
    "NotGreaterSlant" => (0x0000, 0x0000),
    "NotGreaterSlantE" => (0x0000, 0x0000),
    "NotGreaterSlantEq" => (0x0000, 0x0000),
    "NotGreaterSlantEqu" => (0x0000, 0x0000),
    "NotGreaterSlantEqua" => (0x0000, 0x0000),
    "NotGreaterSlantEqual" => (0x0000, 0x0000),
    "NotGreaterSlantEqual;" => (0x2A7E, 0x0338),
    "NotGreaterT" => (0x0000, 0x0000),
    "NotGreaterTi" => (0x0000, 0x0000),
    "NotGreaterTil" => (0x0000, 0x0000),
    "NotGreaterTild" => (0x0000, 0x0000),
    "NotGreaterTilde" => (0x0000, 0x0000),
    "NotGreaterTilde;" => (0x2275, 0x0000),
    "NotH" => (0x0000, 0x0000),
    "NotHu" => (0x0000, 0x0000),
    "NotHum" => (0x0000, 0x0000),
    "NotHump" => (0x0000, 0x0000),
    "NotHumpD" => (0x0000, 0x0000),
    "NotHumpDo" => (0x0000, 0x0000),
    "NotHumpDow" => (0x0000, 0x0000),
    "NotHumpDown" => (0x0000, 0x0000),
    "NotHumpDownH" => (0x0000, 0x0000),
    "NotHumpDownHu" => (0x0000, 0x0000),
    "NotHumpDownHum" => (0x0000, 0x0000),
    "NotHumpDownHump" => (0x0000, 0x0000),
    "NotHumpDownHump;" => (0x224E, 0x0338),
    "NotHumpE" => (0x0000, 0x0000),
    "NotHumpEq" => (0x0000, 0x0000),
    "NotHumpEqu" => (0x0000, 0x0000),
    "NotHumpEqua" => (0x0000, 0x0000),
    "NotHumpEqual" => (0x0000, 0x0000),
    "NotHumpEqual;" => (0x224F, 0x0338),
    "NotL" => (0x0000, 0x0000),
    "NotLe" => (0x0000, 0x0000),
    "NotLef" => (0x0000, 0x0000),
    "NotLeft" => (0x0000, 0x0000),
    "NotLeftT" => (0x0000, 0x0000),
    "NotLeftTr" => (0x0000, 0x0000),
    "NotLeftTri" => (0x0000, 0x0000),
    "NotLeftTria" => (0x0000, 0x0000),
    "NotLeftTrian" => (0x0000, 0x0000),
    "NotLeftTriang" => (0x0000, 0x0000),
    "NotLeftTriangl" => (0x0000, 0x0000),
    "NotLeftTriangle" => (0x0000, 0x0000),
    "NotLeftTriangle;" => (0x22EA, 0x0000),
    "NotLeftTriangleB" => (0x0000, 0x0000),
    "NotLeftTriangleBa" => (0x0000, 0x0000),
    "NotLeftTriangleBar" => (0x0000, 0x0000),
    "NotLeftTriangleBar;" => (0x29CF, 0x0338),
    "NotLeftTriangleE" => (0x0000, 0x0000),
    "NotLeftTriangleEq" => (0x0000, 0x0000),
    "NotLeftTriangleEqu" => (0x0000, 0x0000),
    "NotLeftTriangleEqua" => (0x0000, 0x0000),
    "NotLeftTriangleEqual" => (0x0000, 0x0000),
    "NotLeftTriangleEqual;" => (0x22EC, 0x0000),
    "NotLes" => (0x0000, 0x0000),
    "NotLess" => (0x0000, 0x0000),
    "NotLess;" => (0x226E, 0x0000),
    "NotLessE" => (0x0000, 0x0000),
    "NotLessEq" => (0x0000, 0x0000),
    "NotLessEqu" => (0x0000, 0x0000),
    "NotLessEqua" => (0x0000, 0x0000),
    "NotLessEqual" => (0x0000, 0x0000),
    "NotLessEqual;" => (0x2270, 0x0000),
    "NotLessG" => (0x0000, 0x0000),
    "NotLessGr" => (0x0000, 0x0000),
    "NotLessGre" => (0x0000, 0x0000),
    "NotLessGrea" => (0x0000, 0x0000),
    "NotLessGreat" => (0x0000, 0x0000),
    "NotLessGreate" => (0x0000, 0x0000),
    "NotLessGreater" => (0x0000, 0x0000),
    "NotLessGreater;" => (0x2278, 0x0000),
    "NotLessL" => (0x0000, 0x0000),
    "NotLessLe" => (0x0000, 0x0000),
    "NotLessLes" => (0x0000, 0x0000),
    "NotLessLess" => (0x0000, 0x0000),
    "NotLessLess;" => (0x226A, 0x0338),
    "NotLessS" => (0x0000, 0x0000),
    "NotLessSl" => (0x0000, 0x0000),
    "NotLessSla" => (0x0000, 0x0000),
    "NotLessSlan" => (0x0000, 0x0000),
    "NotLessSlant" => (0x0000, 0x0000),
    "NotLessSlantE" => (0x0000, 0x0000),
    "NotLessSlantEq" => (0x0000, 0x0000),
    "NotLessSlantEqu" => (0x0000, 0x0000),
    "NotLessSlantEqua" => (0x0000, 0x0000),
    "NotLessSlantEqual" => (0x0000, 0x0000),
    "NotLessSlantEqual;" => (0x2A7D, 0x0338),
    "NotLessT" => (0x0000, 0x0000),
    "NotLessTi" => (0x0000, 0x0000),
    "NotLessTil" => (0x0000, 0x0000),
    "NotLessTild" => (0x0000, 0x0000),
    "NotLessTilde" => (0x0000, 0x0000),
    "NotLessTilde;" => (0x2274, 0x0000),
    "NotN" => (0x0000, 0x0000),
    "NotNe" => (0x0000, 0x0000),
    "NotNes" => (0x0000, 0x0000),
    "NotNest" => (0x0000, 0x0000),
    "NotNeste" => (0x0000, 0x0000),
    "NotNested" => (0x0000, 0x0000),
    "NotNestedG" => (0x0000, 0x0000),
    "NotNestedGr" => (0x0000, 0x0000),
    "NotNestedGre" => (0x0000, 0x0000),
    "NotNestedGrea" => (0x0000, 0x0000),
    "NotNestedGreat" => (0x0000, 0x0000),
    "NotNestedGreate" => (0x0000, 0x0000),
    "NotNestedGreater" => (0x0000, 0x0000),
    "NotNestedGreaterG" => (0x0000, 0x0000),
    "NotNestedGreaterGr" => (0x0000, 0x0000),
    "NotNestedGreaterGre" => (0x0000, 0x0000),
    "NotNestedGreaterGrea" => (0x0000, 0x0000),
    "NotNestedGreaterGreat" => (0x0000, 0x0000),
    "NotNestedGreaterGreate" => (0x0000, 0x0000),
    "NotNestedGreaterGreater" => (0x0000, 0x0000),
    "NotNestedGreaterGreater;" => (0x2AA2, 0x0338),
    "NotNestedL" => (0x0000, 0x0000),
    "NotNestedLe" => (0x0000, 0x0000),
    "NotNestedLes" => (0x0000, 0x0000),
    "NotNestedLess" => (0x0000, 0x0000),
    "NotNestedLessL" => (0x0000, 0x0000),
    "NotNestedLessLe" => (0x0000, 0x0000),
    "NotNestedLessLes" => (0x0000, 0x0000),
    "NotNestedLessLess" => (0x0000, 0x0000),
    "NotNestedLessLess;" => (0x2AA1, 0x0338),
    "NotP" => (0x0000, 0x0000),
    "NotPr" => (0x0000, 0x0000),
    "NotPre" => (0x0000, 0x0000),
    "NotPrec" => (0x0000, 0x0000),
    "NotPrece" => (0x0000, 0x0000),
    "NotPreced" => (0x0000, 0x0000),
    "NotPrecede" => (0x0000, 0x0000),
    "NotPrecedes" => (0x0000, 0x0000),
    "NotPrecedes;" => (0x2280, 0x0000),
    "NotPrecedesE" => (0x0000, 0x0000),
    "NotPrecedesEq" => (0x0000, 0x0000),
    "NotPrecedesEqu" => (0x0000, 0x0000),
    "NotPrecedesEqua" => (0x0000, 0x0000),
    "NotPrecedesEqual" => (0x0000, 0x0000),
    "NotPrecedesEqual;" => (0x2AAF, 0x0338),
    "NotPrecedesS" => (0x0000, 0x0000),
    "NotPrecedesSl" => (0x0000, 0x0000),
    "NotPrecedesSla" => (0x0000, 0x0000),
    "NotPrecedesSlan" => (0x0000, 0x0000),
    "NotPrecedesSlant" => (0x0000, 0x0000),
    "NotPrecedesSlantE" => (0x0000, 0x0000),
    "NotPrecedesSlantEq" => (0x0000, 0x0000),
    "NotPrecedesSlantEqu" => (0x0000, 0x0000),
    "NotPrecedesSlantEqua" => (0x0000, 0x0000),
    "NotPrecedesSlantEqual" => (0x0000, 0x0000),
    "NotPrecedesSlantEqual;" => (0x22E0, 0x0000),
    "NotR" => (0x0000, 0x0000),
    "NotRe" => (0x0000, 0x0000),
    "NotRev" => (0x0000, 0x0000),
    "NotReve" => (0x0000, 0x0000),
    "NotRever" => (0x0000, 0x0000),
    "NotRevers" => (0x0000, 0x0000),
    "NotReverse" => (0x0000, 0x0000),
    "NotReverseE" => (0x0000, 0x0000),
    "NotReverseEl" => (0x0000, 0x0000),
    "NotReverseEle" => (0x0000, 0x0000),
    "NotReverseElem" => (0x0000, 0x0000),
    "NotReverseEleme" => (0x0000, 0x0000),
    "NotReverseElemen" => (0x0000, 0x0000),
    "NotReverseElement" => (0x0000, 0x0000),
    "NotReverseElement;" => (0x220C, 0x0000),
    "NotRi" => (0x0000, 0x0000),
    "NotRig" => (0x0000, 0x0000),
    "NotRigh" => (0x0000, 0x0000),
    "NotRight" => (0x0000, 0x0000),
    "NotRightT" => (0x0000, 0x0000),
    "NotRightTr" => (0x0000, 0x0000),
    "NotRightTri" => (0x0000, 0x0000),
    "NotRightTria" => (0x0000, 0x0000),
    "NotRightTrian" => (0x0000, 0x0000),
    "NotRightTriang" => (0x0000, 0x0000),
    "NotRightTriangl" => (0x0000, 0x0000),
    "NotRightTriangle" => (0x0000, 0x0000),
    "NotRightTriangle;" => (0x22EB, 0x0000),
    "NotRightTriangleB" => (0x0000, 0x0000),
    "NotRightTriangleBa" => (0x0000, 0x0000),
    "NotRightTriangleBar" => (0x0000, 0x0000),
    "NotRightTriangleBar;" => (0x29D0, 0x0338),
    "NotRightTriangleE" => (0x0000, 0x0000),
    "NotRightTriangleEq" => (0x0000, 0x0000),
    "NotRightTriangleEqu" => (0x0000, 0x0000),
    "NotRightTriangleEqua" => (0x0000, 0x0000),
    "NotRightTriangleEqual" => (0x0000, 0x0000),
    "NotRightTriangleEqual;" => (0x22ED, 0x0000),
    "NotS" => (0x0000, 0x0000),
    "NotSq" => (0x0000, 0x0000),
    "NotSqu" => (0x0000, 0x0000),
    "NotSqua" => (0x0000, 0x0000),
    "NotSquar" => (0x0000, 0x0000),
    "NotSquare" => (0x0000, 0x0000),
    "NotSquareS" => (0x0000, 0x0000),
    "NotSquareSu" => (0x0000, 0x0000),
    "NotSquareSub" => (0x0000, 0x0000),
    "NotSquareSubs" => (0x0000, 0x0000),
    "NotSquareSubse" => (0x0000, 0x0000),
    "NotSquareSubset" => (0x0000, 0x0000),
    "NotSquareSubset;" => (0x228F, 0x0338),
    "NotSquareSubsetE" => (0x0000, 0x0000),
    "NotSquareSubsetEq" => (0x0000, 0x0000),
    "NotSquareSubsetEqu" => (0x0000, 0x0000),
    "NotSquareSubsetEqua" => (0x0000, 0x0000),
    "NotSquareSubsetEqual" => (0x0000, 0x0000),
    "NotSquareSubsetEqual;" => (0x22E2, 0x0000),
    "NotSquareSup" => (0x0000, 0x0000),
    "NotSquareSupe" => (0x0000, 0x0000),
    "NotSquareSuper" => (0x0000, 0x0000),
    "NotSquareSupers" => (0x0000, 0x0000),
    "NotSquareSuperse" => (0x0000, 0x0000),
    "NotSquareSuperset" => (0x0000, 0x0000),
    "NotSquareSuperset;" => (0x2290, 0x0338),
    "NotSquareSupersetE" => (0x0000, 0x0000),
    "NotSquareSupersetEq" => (0x0000, 0x0000),
    "NotSquareSupersetEqu" => (0x0000, 0x0000),
    "NotSquareSupersetEqua" => (0x0000, 0x0000),
    "NotSquareSupersetEqual" => (0x0000, 0x0000),
    "NotSquareSupersetEqual;" => (0x22E3, 0x0000),
    "NotSu" => (0x0000, 0x0000),
    "NotSub" => (0x0000, 0x0000),
    "NotSubs" => (0x0000, 0x0000),
    "NotSubse" => (0x0000, 0x0000),
    "NotSubset" => (0x0000, 0x0000),
    "NotSubset;" => (0x2282, 0x20D2),
    "NotSubsetE" => (0x0000, 0x0000),
    "NotSubsetEq" => (0x0000, 0x0000),
    "NotSubsetEqu" => (0x0000, 0x0000),
    "NotSubsetEqua" => (0x0000, 0x0000),
    "NotSubsetEqual" => (0x0000, 0x0000),
    "NotSubsetEqual;" => (0x2288, 0x0000),
    "NotSuc" => (0x0000, 0x0000),
    "NotSucc" => (0x0000, 0x0000),
    "NotSucce" => (0x0000, 0x0000),
    "NotSuccee" => (0x0000, 0x0000),
    "NotSucceed" => (0x0000, 0x0000),
    "NotSucceeds" => (0x0000, 0x0000),
    "NotSucceeds;" => (0x2281, 0x0000),
    "NotSucceedsE" => (0x0000, 0x0000),
    "NotSucceedsEq" => (0x0000, 0x0000),
    "NotSucceedsEqu" => (0x0000, 0x0000),
    "NotSucceedsEqua" => (0x0000, 0x0000),
    "NotSucceedsEqual" => (0x0000, 0x0000),
    "NotSucceedsEqual;" => (0x2AB0, 0x0338),
    "NotSucceedsS" => (0x0000, 0x0000),
    "NotSucceedsSl" => (0x0000, 0x0000),
    "NotSucceedsSla" => (0x0000, 0x0000),
    "NotSucceedsSlan" => (0x0000, 0x0000),
    "NotSucceedsSlant" => (0x0000, 0x0000),
    "NotSucceedsSlantE" => (0x0000, 0x0000),
    "NotSucceedsSlantEq" => (0x0000, 0x0000),
    "NotSucceedsSlantEqu" => (0x0000, 0x0000),
    "NotSucceedsSlantEqua" => (0x0000, 0x0000),
    "NotSucceedsSlantEqual" => (0x0000, 0x0000),
    "NotSucceedsSlantEqual;" => (0x22E1, 0x0000),
    "NotSucceedsT" => (0x0000, 0x0000),
    "NotSucceedsTi" => (0x0000, 0x0000),
    "NotSucceedsTil" => (0x0000, 0x0000),
    "NotSucceedsTild" => (0x0000, 0x0000),
    "NotSucceedsTilde" => (0x0000, 0x0000),
    "NotSucceedsTilde;" => (0x227F, 0x0338),
    "NotSup" => (0x0000, 0x0000),
    "NotSupe" => (0x0000, 0x0000),
    "NotSuper" => (0x0000, 0x0000),
    "NotSupers" => (0x0000, 0x0000),
    "NotSuperse" => (0x0000, 0x0000),
    "NotSuperset" => (0x0000, 0x0000),
    "NotSuperset;" => (0x2283, 0x20D2),
    "NotSupersetE" => (0x0000, 0x0000),
    "NotSupersetEq" => (0x0000, 0x0000),
    "NotSupersetEqu" => (0x0000, 0x0000),
    "NotSupersetEqua" => (0x0000, 0x0000),
    "NotSupersetEqual" => (0x0000, 0x0000),
    "NotSupersetEqual;" => (0x2289, 0x0000),
    "NotT" => (0x0000, 0x0000),
    "NotTi" => (0x0000, 0x0000),
    "NotTil" => (0x0000, 0x0000),
    "NotTild" => (0x0000, 0x0000),
    "NotTilde" => (0x0000, 0x0000),
    "NotTilde;" => (0x2241, 0x0000),
    "NotTildeE" => (0x0000, 0x0000),
    "NotTildeEq" => (0x0000, 0x0000),
    "NotTildeEqu" => (0x0000, 0x0000),
    "NotTildeEqua" => (0x0000, 0x0000),
    "NotTildeEqual" => (0x0000, 0x0000),
    "NotTildeEqual;" => (0x2244, 0x0000),
    "NotTildeF" => (0x0000, 0x0000),
    "NotTildeFu" => (0x0000, 0x0000),
    "NotTildeFul" => (0x0000, 0x0000),
    "NotTildeFull" => (0x0000, 0x0000),
    "NotTildeFullE" => (0x0000, 0x0000),
    "NotTildeFullEq" => (0x0000, 0x0000),
    "NotTildeFullEqu" => (0x0000, 0x0000),
    "NotTildeFullEqua" => (0x0000, 0x0000),
    "NotTildeFullEqual" => (0x0000, 0x0000),
    "NotTildeFullEqual;" => (0x2247, 0x0000),
    "NotTildeT" => (0x0000, 0x0000),
    "NotTildeTi" => (0x0000, 0x0000),
    "NotTildeTil" => (0x0000, 0x0000),
    "NotTildeTild" => (0x0000, 0x0000),
    "NotTildeTilde" => (0x0000, 0x0000),
    "NotTildeTilde;" => (0x2249, 0x0000),
    "NotV" => (0x0000, 0x0000),
    "NotVe" => (0x0000, 0x0000),
    "NotVer" => (0x0000, 0x0000),
    "NotVert" => (0x0000, 0x0000),
    "NotVerti" => (0x0000, 0x0000),
    "NotVertic" => (0x0000, 0x0000),
    "NotVertica" => (0x0000, 0x0000),
    "NotVertical" => (0x0000, 0x0000),
    "NotVerticalB" => (0x0000, 0x0000),
    "NotVerticalBa" => (0x0000, 0x0000),
    "NotVerticalBar" => (0x0000, 0x0000),
    "NotVerticalBar;" => (0x2224, 0x0000),
    "Ns" => (0x0000, 0x0000),
    "Nsc" => (0x0000, 0x0000),
    "Nscr" => (0x0000, 0x0000),
    "Nscr;" => (0x1D4A9, 0x0000),
    "Nt" => (0x0000, 0x0000),
    "Nti" => (0x0000, 0x0000),
    "Ntil" => (0x0000, 0x0000),
    "Ntild" => (0x0000, 0x0000),
    "Ntilde" => (0x00D1, 0x0000),
    "Ntilde;" => (0x00D1, 0x0000),
    "Nu" => (0x0000, 0x0000),
    "Nu;" => (0x039D, 0x0000),
    "O" => (0x0000, 0x0000),
    "OE" => (0x0000, 0x0000),
    "OEl" => (0x0000, 0x0000),
    "OEli" => (0x0000, 0x0000),
    "OElig" => (0x0000, 0x0000),
    "OElig;" => (0x0152, 0x0000),
    "Oa" => (0x0000, 0x0000),
    "Oac" => (0x0000, 0x0000),
    "Oacu" => (0x0000, 0x0000),
    "Oacut" => (0x0000, 0x0000),
    "Oacute" => (0x00D3, 0x0000),
    "Oacute;" => (0x00D3, 0x0000),
    "Oc" => (0x0000, 0x0000),
    "Oci" => (0x0000, 0x0000),
    "Ocir" => (0x0000, 0x0000),
    "Ocirc" => (0x00D4, 0x0000),
    "Ocirc;" => (0x00D4, 0x0000),
    "Ocy" => (0x0000, 0x0000),
    "Ocy;" => (0x041E, 0x0000),
    "Od" => (0x0000, 0x0000),
    "Odb" => (0x0000, 0x0000),
    "Odbl" => (0x0000, 0x0000),
    "Odbla" => (0x0000, 0x0000),
    "Odblac" => (0x0000, 0x0000),
    "Odblac;" => (0x0150, 0x0000),
    "Of" => (0x0000, 0x0000),
    "Ofr" => (0x0000, 0x0000),
    "Ofr;" => (0x1D512, 0x0000),
    "Og" => (0x0000, 0x0000),
    "Ogr" => (0x0000, 0x0000),
    "Ogra" => (0x0000, 0x0000),
    "Ograv" => (0x0000, 0x0000),
    "Ograve" => (0x00D2, 0x0000),
    "Ograve;" => (0x00D2, 0x0000),
    "Om" => (0x0000, 0x0000),
    "Oma" => (0x0000, 0x0000),
    "Omac" => (0x0000, 0x0000),
    "Omacr" => (0x0000, 0x0000),
    "Omacr;" => (0x014C, 0x0000),
    "Ome" => (0x0000, 0x0000),
    "Omeg" => (0x0000, 0x0000),
    "Omega" => (0x0000, 0x0000),
    "Omega;" => (0x03A9, 0x0000),
    "Omi" => (0x0000, 0x0000),
    "Omic" => (0x0000, 0x0000),
    "Omicr" => (0x0000, 0x0000),
    "Omicro" => (0x0000, 0x0000),
    "Omicron" => (0x0000, 0x0000),
    "Omicron;" => (0x039F, 0x0000),
    "Oo" => (0x0000, 0x0000),
    "Oop" => (0x0000, 0x0000),
    "Oopf" => (0x0000, 0x0000),
    "Oopf;" => (0x1D546, 0x0000),
    "Op" => (0x0000, 0x0000),
    "Ope" => (0x0000, 0x0000),
    "Open" => (0x0000, 0x0000),
    "OpenC" => (0x0000, 0x0000),
    "OpenCu" => (0x0000, 0x0000),
    "OpenCur" => (0x0000, 0x0000),
    "OpenCurl" => (0x0000, 0x0000),
    "OpenCurly" => (0x0000, 0x0000),
    "OpenCurlyD" => (0x0000, 0x0000),
    "OpenCurlyDo" => (0x0000, 0x0000),
    "OpenCurlyDou" => (0x0000, 0x0000),
    "OpenCurlyDoub" => (0x0000, 0x0000),
    "OpenCurlyDoubl" => (0x0000, 0x0000),
    "OpenCurlyDouble" => (0x0000, 0x0000),
    "OpenCurlyDoubleQ" => (0x0000, 0x0000),
    "OpenCurlyDoubleQu" => (0x0000, 0x0000),
    "OpenCurlyDoubleQuo" => (0x0000, 0x0000),
    "OpenCurlyDoubleQuot" => (0x0000, 0x0000),
    "OpenCurlyDoubleQuote" => (0x0000, 0x0000),
    "OpenCurlyDoubleQuote;" => (0x201C, 0x0000),
    "OpenCurlyQ" => (0x0000, 0x0000),
    "OpenCurlyQu" => (0x0000, 0x0000),
    "OpenCurlyQuo" => (0x0000, 0x0000),
    "OpenCurlyQuot" => (0x0000, 0x0000),
    "OpenCurlyQuote" => (0x0000, 0x0000),
    "OpenCurlyQuote;" => (0x2018, 0x0000),
    "Or" => (0x0000, 0x0000),
    "Or;" => (0x2A54, 0x0000),
    "Os" => (0x0000, 0x0000),
    "Osc" => (0x0000, 0x0000),
    "Oscr" => (0x0000, 0x0000),
    "Oscr;" => (0x1D4AA, 0x0000),
    "Osl" => (0x0000, 0x0000),
    "Osla" => (0x0000, 0x0000),
    "Oslas" => (0x0000, 0x0000),
    "Oslash" => (0x00D8, 0x0000),
    "Oslash;" => (0x00D8, 0x0000),
    "Ot" => (0x0000, 0x0000),
    "Oti" => (0x0000, 0x0000),
    "Otil" => (0x0000, 0x0000),
    "Otild" => (0x0000, 0x0000),
    "Otilde" => (0x00D5, 0x0000),
    "Otilde;" => (0x00D5, 0x0000),
    "Otim" => (0x0000, 0x0000),
    "Otime" => (0x0000, 0x0000),
    "Otimes" => (0x0000, 0x0000),
    "Otimes;" => (0x2A37, 0x0000),
    "Ou" => (0x0000, 0x0000),
    "Oum" => (0x0000, 0x0000),
    "Ouml" => (0x00D6, 0x0000),
    "Ouml;" => (0x00D6, 0x0000),
    "Ov" => (0x0000, 0x0000),
    "Ove" => (0x0000, 0x0000),
    "Over" => (0x0000, 0x0000),
    "OverB" => (0x0000, 0x0000),
    "OverBa" => (0x0000, 0x0000),
    "OverBar" => (0x0000, 0x0000),
    "OverBar;" => (0x203E, 0x0000),
    "OverBr" => (0x0000, 0x0000),
    "OverBra" => (0x0000, 0x0000),
    "OverBrac" => (0x0000, 0x0000),
    "OverBrace" => (0x0000, 0x0000),
    "OverBrace;" => (0x23DE, 0x0000),
    "OverBrack" => (0x0000, 0x0000),
    "OverBracke" => (0x0000, 0x0000),
    "OverBracket" => (0x0000, 0x0000),
    "OverBracket;" => (0x23B4, 0x0000),
    "OverP" => (0x0000, 0x0000),
    "OverPa" => (0x0000, 0x0000),
    "OverPar" => (0x0000, 0x0000),
    "OverPare" => (0x0000, 0x0000),
    "OverParen" => (0x0000, 0x0000),
    "OverParent" => (0x0000, 0x0000),
    "OverParenth" => (0x0000, 0x0000),
    "OverParenthe" => (0x0000, 0x0000),
    "OverParenthes" => (0x0000, 0x0000),
    "OverParenthesi" => (0x0000, 0x0000),
    "OverParenthesis" => (0x0000, 0x0000),
    "OverParenthesis;" => (0x23DC, 0x0000),
    "P" => (0x0000, 0x0000),
    "Pa" => (0x0000, 0x0000),
    "Par" => (0x0000, 0x0000),
    "Part" => (0x0000, 0x0000),
    "Parti" => (0x0000, 0x0000),
    "Partia" => (0x0000, 0x0000),
    "Partial" => (0x0000, 0x0000),
    "PartialD" => (0x0000, 0x0000),
    "PartialD;" => (0x2202, 0x0000),
    "Pc" => (0x0000, 0x0000),
    "Pcy" => (0x0000, 0x0000),
    "Pcy;" => (0x041F, 0x0000),
    "Pf" => (0x0000, 0x0000),
    "Pfr" => (0x0000, 0x0000),
    "Pfr;" => (0x1D513, 0x0000),
    "Ph" => (0x0000, 0x0000),
    "Phi" => (0x0000, 0x0000),
    "Phi;" => (0x03A6, 0x0000),
    "Pi" => (0x0000, 0x0000),
    "Pi;" => (0x03A0, 0x0000),
    "Pl" => (0x0000, 0x0000),
    "Plu" => (0x0000, 0x0000),
    "Plus" => (0x0000, 0x0000),
    "PlusM" => (0x0000, 0x0000),
    "PlusMi" => (0x0000, 0x0000),
    "PlusMin" => (0x0000, 0x0000),
    "PlusMinu" => (0x0000, 0x0000),
    "PlusMinus" => (0x0000, 0x0000),
    "PlusMinus;" => (0x00B1, 0x0000),
    "Po" => (0x0000, 0x0000),
    "Poi" => (0x0000, 0x0000),
    "Poin" => (0x0000, 0x0000),
    "Poinc" => (0x0000, 0x0000),
    "Poinca" => (0x0000, 0x0000),
    "Poincar" => (0x0000, 0x0000),
    "Poincare" => (0x0000, 0x0000),
    "Poincarep" => (0x0000, 0x0000),
    "Poincarepl" => (0x0000, 0x0000),
    "Poincarepla" => (0x0000, 0x0000),
    "Poincareplan" => (0x0000, 0x0000),
    "Poincareplane" => (0x0000, 0x0000),
    "Poincareplane;" => (0x210C, 0x0000),
    "Pop" => (0x0000, 0x0000),
    "Popf" => (0x0000, 0x0000),
    "Popf;" => (0x2119, 0x0000),
    "Pr" => (0x0000, 0x0000),
    "Pr;" => (0x2ABB, 0x0000),
    "Pre" => (0x0000, 0x0000),
    "Prec" => (0x0000, 0x0000),
    "Prece" => (0x0000, 0x0000),
    "Preced" => (0x0000, 0x0000),
    "Precede" => (0x0000, 0x0000),
    "Precedes" => (0x0000, 0x0000),
    "Precedes;" => (0x227A, 0x0000),
    "PrecedesE" => (0x0000, 0x0000),
    "PrecedesEq" => (0x0000, 0x0000),
    "PrecedesEqu" => (0x0000, 0x0000),
    "PrecedesEqua" => (0x0000, 0x0000),
    "PrecedesEqual" => (0x0000, 0x0000),
    "PrecedesEqual;" => (0x2AAF, 0x0000),
    "PrecedesS" => (0x0000, 0x0000),
    "PrecedesSl" => (0x0000, 0x0000),
    "PrecedesSla" => (0x0000, 0x0000),
    "PrecedesSlan" => (0x0000, 0x0000),
    "PrecedesSlant" => (0x0000, 0x0000),
    "PrecedesSlantE" => (0x0000, 0x0000),
    "PrecedesSlantEq" => (0x0000, 0x0000),
    "PrecedesSlantEqu" => (0x0000, 0x0000),
    "PrecedesSlantEqua" => (0x0000, 0x0000),
    "PrecedesSlantEqual" => (0x0000, 0x0000),
    "PrecedesSlantEqual;" => (0x227C, 0x0000),
    "PrecedesT" => (0x0000, 0x0000),
    "PrecedesTi" => (0x0000, 0x0000),
    "PrecedesTil" => (0x0000, 0x0000),
    "PrecedesTild" => (0x0000, 0x0000),
    "PrecedesTilde" => (0x0000, 0x0000),
    "PrecedesTilde;" => (0x227E, 0x0000),
    "Pri" => (0x0000, 0x0000),
    "Prim" => (0x0000, 0x0000),
    "Prime" => (0x0000, 0x0000),
    "Prime;" => (0x2033, 0x0000),
    "Pro" => (0x0000, 0x0000),
    "Prod" => (0x0000, 0x0000),
    "Produ" => (0x0000, 0x0000),
    "Produc" => (0x0000, 0x0000),
    "Product" => (0x0000, 0x0000),
    "Product;" => (0x220F, 0x0000),
    "Prop" => (0x0000, 0x0000),
    "Propo" => (0x0000, 0x0000),
    "Propor" => (0x0000, 0x0000),
    "Proport" => (0x0000, 0x0000),
    "Proporti" => (0x0000, 0x0000),
    "Proportio" => (0x0000, 0x0000),
    "Proportion" => (0x0000, 0x0000),
    "Proportion;" => (0x2237, 0x0000),
    "Proportiona" => (0x0000, 0x0000),
    "Proportional" => (0x0000, 0x0000),
    "Proportional;" => (0x221D, 0x0000),
    "Ps" => (0x0000, 0x0000),
    "Psc" => (0x0000, 0x0000),
    "Pscr" => (0x0000, 0x0000),
    "Pscr;" => (0x1D4AB, 0x0000),
    "Psi" => (0x0000, 0x0000),
    "Psi;" => (0x03A8, 0x0000),
    "Q" => (0x0000, 0x0000),
    "QU" => (0x0000, 0x0000),
    "QUO" => (0x0000, 0x0000),
    "QUOT" => (0x0022, 0x0000),
    "QUOT;" => (0x0022, 0x0000),
    "Qf" => (0x0000, 0x0000),
    "Qfr" => (0x0000, 0x0000),
    "Qfr;" => (0x1D514, 0x0000),
    "Qo" => (0x0000, 0x0000),
    "Qop" => (0x0000, 0x0000),
    "Qopf" => (0x0000, 0x0000),
    "Qopf;" => (0x211A, 0x0000),
    "Qs" => (0x0000, 0x0000),
    "Qsc" => (0x0000, 0x0000),
    "Qscr" => (0x0000, 0x0000),
    "Qscr;" => (0x1D4AC, 0x0000),
    "R" => (0x0000, 0x0000),
    "RB" => (0x0000, 0x0000),
    "RBa" => (0x0000, 0x0000),
    "RBar" => (0x0000, 0x0000),
    "RBarr" => (0x0000, 0x0000),
    "RBarr;" => (0x2910, 0x0000),
    "RE" => (0x0000, 0x0000),
    "REG" => (0x00AE, 0x0000),
    "REG;" => (0x00AE, 0x0000),
    "Ra" => (0x0000, 0x0000),
    "Rac" => (0x0000, 0x0000),
    "Racu" => (0x0000, 0x0000),
    "Racut" => (0x0000, 0x0000),
    "Racute" => (0x0000, 0x0000),
    "Racute;" => (0x0154, 0x0000),
    "Ran" => (0x0000, 0x0000),
    "Rang" => (0x0000, 0x0000),
    "Rang;" => (0x27EB, 0x0000),
    "Rar" => (0x0000, 0x0000),
    "Rarr" => (0x0000, 0x0000),
    "Rarr;" => (0x21A0, 0x0000),
    "Rarrt" => (0x0000, 0x0000),
    "Rarrtl" => (0x0000, 0x0000),
    "Rarrtl;" => (0x2916, 0x0000),
    "Rc" => (0x0000, 0x0000),
    "Rca" => (0x0000, 0x0000),
    "Rcar" => (0x0000, 0x0000),
    "Rcaro" => (0x0000, 0x0000),
    "Rcaron" => (0x0000, 0x0000),
    "Rcaron;" => (0x0158, 0x0000),
    "Rce" => (0x0000, 0x0000),
    "Rced" => (0x0000, 0x0000),
    "Rcedi" => (0x0000, 0x0000),
    "Rcedil" => (0x0000, 0x0000),
    "Rcedil;" => (0x0156, 0x0000),
    "Rcy" => (0x0000, 0x0000),
    "Rcy;" => (0x0420, 0x0000),
    "Re" => (0x0000, 0x0000),
    "Re;" => (0x211C, 0x0000),
    "Rev" => (0x0000, 0x0000),
    "Reve" => (0x0000, 0x0000),
    "Rever" => (0x0000, 0x0000),
    "Revers" => (0x0000, 0x0000),
    "Reverse" => (0x0000, 0x0000),
    "ReverseE" => (0x0000, 0x0000),
    "ReverseEl" => (0x0000, 0x0000),
    "ReverseEle" => (0x0000, 0x0000),
    "ReverseElem" => (0x0000, 0x0000),
    "ReverseEleme" => (0x0000, 0x0000),
    "ReverseElemen" => (0x0000, 0x0000),
    "ReverseElement" => (0x0000, 0x0000),
    "ReverseElement;" => (0x220B, 0x0000),
    "ReverseEq" => (0x0000, 0x0000),
    "ReverseEqu" => (0x0000, 0x0000),
    "ReverseEqui" => (0x0000, 0x0000),
    "ReverseEquil" => (0x0000, 0x0000),
    "ReverseEquili" => (0x0000, 0x0000),
    "ReverseEquilib" => (0x0000, 0x0000),
    "ReverseEquilibr" => (0x0000, 0x0000),
    "ReverseEquilibri" => (0x0000, 0x0000),
    "ReverseEquilibriu" => (0x0000, 0x0000),
    "ReverseEquilibrium" => (0x0000, 0x0000),
    "ReverseEquilibrium;" => (0x21CB, 0x0000),
    "ReverseU" => (0x0000, 0x0000),
    "ReverseUp" => (0x0000, 0x0000),
    "ReverseUpE" => (0x0000, 0x0000),
    "ReverseUpEq" => (0x0000, 0x0000),
    "ReverseUpEqu" => (0x0000, 0x0000),
    "ReverseUpEqui" => (0x0000, 0x0000),
    "ReverseUpEquil" => (0x0000, 0x0000),
    "ReverseUpEquili" => (0x0000, 0x0000),
    "ReverseUpEquilib" => (0x0000, 0x0000),
    "ReverseUpEquilibr" => (0x0000, 0x0000),
    "ReverseUpEquilibri" => (0x0000, 0x0000),
    "ReverseUpEquilibriu" => (0x0000, 0x0000),
    "ReverseUpEquilibrium" => (0x0000, 0x0000),
    "ReverseUpEquilibrium;" => (0x296F, 0x0000),
    "Rf" => (0x0000, 0x0000),
    "Rfr" => (0x0000, 0x0000),
    "Rfr;" => (0x211C, 0x0000),
    "Rh" => (0x0000, 0x0000),
    "Rho" => (0x0000, 0x0000),
    "Rho;" => (0x03A1, 0x0000),
    "Ri" => (0x0000, 0x0000),
    "Rig" => (0x0000, 0x0000),
    "Righ" => (0x0000, 0x0000),
    "Right" => (0x0000, 0x0000),
    "RightA" => (0x0000, 0x0000),
    "RightAn" => (0x0000, 0x0000),
    "RightAng" => (0x0000, 0x0000),
    "RightAngl" => (0x0000, 0x0000),
    "RightAngle" => (0x0000, 0x0000),
    "RightAngleB" => (0x0000, 0x0000),
    "RightAngleBr" => (0x0000, 0x0000),
    "RightAngleBra" => (0x0000, 0x0000),
    "RightAngleBrac" => (0x0000, 0x0000),
    "RightAngleBrack" => (0x0000, 0x0000),
    "RightAngleBracke" => (0x0000, 0x0000),
    "RightAngleBracket" => (0x0000, 0x0000),
    "RightAngleBracket;" => (0x27E9, 0x0000),
    "RightAr" => (0x0000, 0x0000),
    "RightArr" => (0x0000, 0x0000),
    "RightArro" => (0x0000, 0x0000),
    "RightArrow" => (0x0000, 0x0000),
    "RightArrow;" => (0x2192, 0x0000),
    "RightArrowB" => (0x0000, 0x0000),
    "RightArrowBa" => (0x0000, 0x0000),
    "RightArrowBar" => (0x0000, 0x0000),
    "RightArrowBar;" => (0x21E5, 0x0000),
    "RightArrowL" => (0x0000, 0x0000),
    "RightArrowLe" => (0x0000, 0x0000),
    "RightArrowLef" => (0x0000, 0x0000),
    "RightArrowLeft" => (0x0000, 0x0000),
    "RightArrowLeftA" => (0x0000, 0x0000),
    "RightArrowLeftAr" => (0x0000, 0x0000),
    "RightArrowLeftArr" => (0x0000, 0x0000),
    "RightArrowLeftArro" => (0x0000, 0x0000),
    "RightArrowLeftArrow" => (0x0000, 0x0000),
    "RightArrowLeftArrow;" => (0x21C4, 0x0000),
    "RightC" => (0x0000, 0x0000),
    "RightCe" => (0x0000, 0x0000),
    "RightCei" => (0x0000, 0x0000),
    "RightCeil" => (0x0000, 0x0000),
    "RightCeili" => (0x0000, 0x0000),
    "RightCeilin" => (0x0000, 0x0000),
    "RightCeiling" => (0x0000, 0x0000),
    "RightCeiling;" => (0x2309, 0x0000),
    "RightD" => (0x0000, 0x0000),
    "RightDo" => (0x0000, 0x0000),
    "RightDou" => (0x0000, 0x0000),
    "RightDoub" => (0x0000, 0x0000),
    "RightDoubl" => (0x0000, 0x0000),
    "RightDouble" => (0x0000, 0x0000),
    "RightDoubleB" => (0x0000, 0x0000),
    "RightDoubleBr" => (0x0000, 0x0000),
    "RightDoubleBra" => (0x0000, 0x0000),
    "RightDoubleBrac" => (0x0000, 0x0000),
    "RightDoubleBrack" => (0x0000, 0x0000),
    "RightDoubleBracke" => (0x0000, 0x0000),
    "RightDoubleBracket" => (0x0000, 0x0000),
    "RightDoubleBracket;" => (0x27E7, 0x0000),
    "RightDow" => (0x0000, 0x0000),
    "RightDown" => (0x0000, 0x0000),
    "RightDownT" => (0x0000, 0x0000),
    "RightDownTe" => (0x0000, 0x0000),
    "RightDownTee" => (0x0000, 0x0000),
    "RightDownTeeV" => (0x0000, 0x0000),
    "RightDownTeeVe" => (0x0000, 0x0000),
    "RightDownTeeVec" => (0x0000, 0x0000),
    "RightDownTeeVect" => (0x0000, 0x0000),
    "RightDownTeeVecto" => (0x0000, 0x0000),
    "RightDownTeeVector" => (0x0000, 0x0000),
    "RightDownTeeVector;" => (0x295D, 0x0000),
    "RightDownV" => (0x0000, 0x0000),
    "RightDownVe" => (0x0000, 0x0000),
    "RightDownVec" => (0x0000, 0x0000),
    "RightDownVect" => (0x0000, 0x0000),
    "RightDownVecto" => (0x0000, 0x0000),
    "RightDownVector" => (0x0000, 0x0000),
    "RightDownVector;" => (0x21C2, 0x0000),
    "RightDownVectorB" => (0x0000, 0x0000),
    "RightDownVectorBa" => (0x0000, 0x0000),
    "RightDownVectorBar" => (0x0000, 0x0000),
    "RightDownVectorBar;" => (0x2955, 0x0000),
    "RightF" => (0x0000, 0x0000),
    "RightFl" => (0x0000, 0x0000),
    "RightFlo" => (0x0000, 0x0000),
    "RightFloo" => (0x0000, 0x0000),
    "RightFloor" => (0x0000, 0x0000),
    "RightFloor;" => (0x230B, 0x0000),
    "RightT" => (0x0000, 0x0000),
    "RightTe" => (0x0000, 0x0000),
    "RightTee" => (0x0000, 0x0000),
    "RightTee;" => (0x22A2, 0x0000),
    "RightTeeA" => (0x0000, 0x0000),
    "RightTeeAr" => (0x0000, 0x0000),
    "RightTeeArr" => (0x0000, 0x0000),
    "RightTeeArro" => (0x0000, 0x0000),
    "RightTeeArrow" => (0x0000, 0x0000),
    "RightTeeArrow;" => (0x21A6, 0x0000),
    "RightTeeV" => (0x0000, 0x0000),
    "RightTeeVe" => (0x0000, 0x0000),
    "RightTeeVec" => (0x0000, 0x0000),
    "RightTeeVect" => (0x0000, 0x0000),
    "RightTeeVecto" => (0x0000, 0x0000),
    "RightTeeVector" => (0x0000, 0x0000),
    "RightTeeVector;" => (0x295B, 0x0000),
    "RightTr" => (0x0000, 0x0000),
    "RightTri" => (0x0000, 0x0000),
    "RightTria" => (0x0000, 0x0000),
    "RightTrian" => (0x0000, 0x0000),
    "RightTriang" => (0x0000, 0x0000),
    "RightTriangl" => (0x0000, 0x0000),
    "RightTriangle" => (0x0000, 0x0000),
    "RightTriangle;" => (0x22B3, 0x0000),
    "RightTriangleB" => (0x0000, 0x0000),
    "RightTriangleBa" => (0x0000, 0x0000),
    "RightTriangleBar" => (0x0000, 0x0000),
    "RightTriangleBar;" => (0x29D0, 0x0000),
    "RightTriangleE" => (0x0000, 0x0000),
    "RightTriangleEq" => (0x0000, 0x0000),
    "RightTriangleEqu" => (0x0000, 0x0000),
    "RightTriangleEqua" => (0x0000, 0x0000),
    "RightTriangleEqual" => (0x0000, 0x0000),
    "RightTriangleEqual;" => (0x22B5, 0x0000),
    "RightU" => (0x0000, 0x0000),
    "RightUp" => (0x0000, 0x0000),
    "RightUpD" => (0x0000, 0x0000),
    "RightUpDo" => (0x0000, 0x0000),
    "RightUpDow" => (0x0000, 0x0000),
    "RightUpDown" => (0x0000, 0x0000),
    "RightUpDownV" => (0x0000, 0x0000),
    "RightUpDownVe" => (0x0000, 0x0000),
    "RightUpDownVec" => (0x0000, 0x0000),
    "RightUpDownVect" => (0x0000, 0x0000),
    "RightUpDownVecto" => (0x0000, 0x0000),
    "RightUpDownVector" => (0x0000, 0x0000),
    "RightUpDownVector;" => (0x294F, 0x0000),
    "RightUpT" => (0x0000, 0x0000),
    "RightUpTe" => (0x0000, 0x0000),
    "RightUpTee" => (0x0000, 0x0000),
    "RightUpTeeV" => (0x0000, 0x0000),
    "RightUpTeeVe" => (0x0000, 0x0000),
    "RightUpTeeVec" => (0x0000, 0x0000),
    "RightUpTeeVect" => (0x0000, 0x0000),
    "RightUpTeeVecto" => (0x0000, 0x0000),
    "RightUpTeeVector" => (0x0000, 0x0000),
    "RightUpTeeVector;" => (0x295C, 0x0000),
    "RightUpV" => (0x0000, 0x0000),
    "RightUpVe" => (0x0000, 0x0000),
    "RightUpVec" => (0x0000, 0x0000),
    "RightUpVect" => (0x0000, 0x0000),
    "RightUpVecto" => (0x0000, 0x0000),
    "RightUpVector" => (0x0000, 0x0000),
    "RightUpVector;" => (0x21BE, 0x0000),
    "RightUpVectorB" => (0x0000, 0x0000),
    "RightUpVectorBa" => (0x0000, 0x0000),
    "RightUpVectorBar" => (0x0000, 0x0000),
    "RightUpVectorBar;" => (0x2954, 0x0000),
    "RightV" => (0x0000, 0x0000),
    "RightVe" => (0x0000, 0x0000),
    "RightVec" => (0x0000, 0x0000),
    "RightVect" => (0x0000, 0x0000),
    "RightVecto" => (0x0000, 0x0000),
    "RightVector" => (0x0000, 0x0000),
    "RightVector;" => (0x21C0, 0x0000),
    "RightVectorB" => (0x0000, 0x0000),
    "RightVectorBa" => (0x0000, 0x0000),
    "RightVectorBar" => (0x0000, 0x0000),
    "RightVectorBar;" => (0x2953, 0x0000),
    "Righta" => (0x0000, 0x0000),
    "Rightar" => (0x0000, 0x0000),
    "Rightarr" => (0x0000, 0x0000),
    "Rightarro" => (0x0000, 0x0000),
    "Rightarrow" => (0x0000, 0x0000),
    "Rightarrow;" => (0x21D2, 0x0000),
    "Ro" => (0x0000, 0x0000),
    "Rop" => (0x0000, 0x0000),
    "Ropf" => (0x0000, 0x0000),
    "Ropf;" => (0x211D, 0x0000),
    "Rou" => (0x0000, 0x0000),
    "Roun" => (0x0000, 0x0000),
    "Round" => (0x0000, 0x0000),
    "RoundI" => (0x0000, 0x0000),
    "RoundIm" => (0x0000, 0x0000),
    "RoundImp" => (0x0000, 0x0000),
    "RoundImpl" => (0x0000, 0x0000),
    "RoundImpli" => (0x0000, 0x0000),
    "RoundImplie" => (0x0000, 0x0000),
    "RoundImplies" => (0x0000, 0x0000),
    "RoundImplies;" => (0x2970, 0x0000),
    "Rr" => (0x0000, 0x0000),
    "Rri" => (0x0000, 0x0000),
    "Rrig" => (0x0000, 0x0000),
    "Rrigh" => (0x0000, 0x0000),
    "Rright" => (0x0000, 0x0000),
    "Rrighta" => (0x0000, 0x0000),
    "Rrightar" => (0x0000, 0x0000),
    "Rrightarr" => (0x0000, 0x0000),
    "Rrightarro" => (0x0000, 0x0000),
    "Rrightarrow" => (0x0000, 0x0000),
    "Rrightarrow;" => (0x21DB, 0x0000),
    "Rs" => (0x0000, 0x0000),
    "Rsc" => (0x0000, 0x0000),
    "Rscr" => (0x0000, 0x0000),
    "Rscr;" => (0x211B, 0x0000),
    "Rsh" => (0x0000, 0x0000),
    "Rsh;" => (0x21B1, 0x0000),
    "Ru" => (0x0000, 0x0000),
    "Rul" => (0x0000, 0x0000),
    "Rule" => (0x0000, 0x0000),
    "RuleD" => (0x0000, 0x0000),
    "RuleDe" => (0x0000, 0x0000),
    "RuleDel" => (0x0000, 0x0000),
    "RuleDela" => (0x0000, 0x0000),
    "RuleDelay" => (0x0000, 0x0000),
    "RuleDelaye" => (0x0000, 0x0000),
    "RuleDelayed" => (0x0000, 0x0000),
    "RuleDelayed;" => (0x29F4, 0x0000),
    "S" => (0x0000, 0x0000),
    "SH" => (0x0000, 0x0000),
    "SHC" => (0x0000, 0x0000),
    "SHCH" => (0x0000, 0x0000),
    "SHCHc" => (0x0000, 0x0000),
    "SHCHcy" => (0x0000, 0x0000),
    "SHCHcy;" => (0x0429, 0x0000),
    "SHc" => (0x0000, 0x0000),
    "SHcy" => (0x0000, 0x0000),
    "SHcy;" => (0x0428, 0x0000),
    "SO" => (0x0000, 0x0000),
    "SOF" => (0x0000, 0x0000),
    "SOFT" => (0x0000, 0x0000),
    "SOFTc" => (0x0000, 0x0000),
    "SOFTcy" => (0x0000, 0x0000),
    "SOFTcy;" => (0x042C, 0x0000),
    "Sa" => (0x0000, 0x0000),
    "Sac" => (0x0000, 0x0000),
    "Sacu" => (0x0000, 0x0000),
    "Sacut" => (0x0000, 0x0000),
    "Sacute" => (0x0000, 0x0000),
    "Sacute;" => (0x015A, 0x0000),
    "Sc" => (0x0000, 0x0000),
    "Sc;" => (0x2ABC, 0x0000),
    "Sca" => (0x0000, 0x0000),
    "Scar" => (0x0000, 0x0000),
    "Scaro" => (0x0000, 0x0000),
    "Scaron" => (0x0000, 0x0000),
    "Scaron;" => (0x0160, 0x0000),
    "Sce" => (0x0000, 0x0000),
    "Sced" => (0x0000, 0x0000),
    "Scedi" => (0x0000, 0x0000),
    "Scedil" => (0x0000, 0x0000),
    "Scedil;" => (0x015E, 0x0000),
    "Sci" => (0x0000, 0x0000),
    "Scir" => (0x0000, 0x0000),
    "Scirc" => (0x0000, 0x0000),
    "Scirc;" => (0x015C, 0x0000),
    "Scy" => (0x0000, 0x0000),
    "Scy;" => (0x0421, 0x0000),
    "Sf" => (0x0000, 0x0000),
    "Sfr" => (0x0000, 0x0000),
    "Sfr;" => (0x1D516, 0x0000),
    "Sh" => (0x0000, 0x0000),
    "Sho" => (0x0000, 0x0000),
    "Shor" => (0x0000, 0x0000),
    "Short" => (0x0000, 0x0000),
    "ShortD" => (0x0000, 0x0000),
    "ShortDo" => (0x0000, 0x0000),
    "ShortDow" => (0x0000, 0x0000),
    "ShortDown" => (0x0000, 0x0000),
    "ShortDownA" => (0x0000, 0x0000),
    "ShortDownAr" => (0x0000, 0x0000),
    "ShortDownArr" => (0x0000, 0x0000),
    "ShortDownArro" => (0x0000, 0x0000),
    "ShortDownArrow" => (0x0000, 0x0000),
    "ShortDownArrow;" => (0x2193, 0x0000),
    "ShortL" => (0x0000, 0x0000),
    "ShortLe" => (0x0000, 0x0000),
    "ShortLef" => (0x0000, 0x0000),
    "ShortLeft" => (0x0000, 0x0000),
    "ShortLeftA" => (0x0000, 0x0000),
    "ShortLeftAr" => (0x0000, 0x0000),
    "ShortLeftArr" => (0x0000, 0x0000),
    "ShortLeftArro" => (0x0000, 0x0000),
    "ShortLeftArrow" => (0x0000, 0x0000),
    "ShortLeftArrow;" => (0x2190, 0x0000),
    "ShortR" => (0x0000, 0x0000),
    "ShortRi" => (0x0000, 0x0000),
    "ShortRig" => (0x0000, 0x0000),
    "ShortRigh" => (0x0000, 0x0000),
    "ShortRight" => (0x0000, 0x0000),
    "ShortRightA" => (0x0000, 0x0000),
    "ShortRightAr" => (0x0000, 0x0000),
    "ShortRightArr" => (0x0000, 0x0000),
    "ShortRightArro" => (0x0000, 0x0000),
    "ShortRightArrow" => (0x0000, 0x0000),
    "ShortRightArrow;" => (0x2192, 0x0000),
    "ShortU" => (0x0000, 0x0000),
    "ShortUp" => (0x0000, 0x0000),
    "ShortUpA" => (0x0000, 0x0000),
    "ShortUpAr" => (0x0000, 0x0000),
    "ShortUpArr" => (0x0000, 0x0000),
    "ShortUpArro" => (0x0000, 0x0000),
    "ShortUpArrow" => (0x0000, 0x0000),
    "ShortUpArrow;" => (0x2191, 0x0000),
    "Si" => (0x0000, 0x0000),
    "Sig" => (0x0000, 0x0000),
    "Sigm" => (0x0000, 0x0000),
    "Sigma" => (0x0000, 0x0000),
    "Sigma;" => (0x03A3, 0x0000),
    "Sm" => (0x0000, 0x0000),
    "Sma" => (0x0000, 0x0000),
    "Smal" => (0x0000, 0x0000),
    "Small" => (0x0000, 0x0000),
    "SmallC" => (0x0000, 0x0000),
    "SmallCi" => (0x0000, 0x0000),
    "SmallCir" => (0x0000, 0x0000),
    "SmallCirc" => (0x0000, 0x0000),
    "SmallCircl" => (0x0000, 0x0000),
    "SmallCircle" => (0x0000, 0x0000),
    "SmallCircle;" => (0x2218, 0x0000),
    "So" => (0x0000, 0x0000),
    "Sop" => (0x0000, 0x0000),
    "Sopf" => (0x0000, 0x0000),
    "Sopf;" => (0x1D54A, 0x0000),
    "Sq" => (0x0000, 0x0000),
    "Sqr" => (0x0000, 0x0000),
    "Sqrt" => (0x0000, 0x0000),
    "Sqrt;" => (0x221A, 0x0000),
    "Squ" => (0x0000, 0x0000),
    "Squa" => (0x0000, 0x0000),
    "Squar" => (0x0000, 0x0000),
    "Square" => (0x0000, 0x0000),
    "Square;" => (0x25A1, 0x0000),
    "SquareI" => (0x0000, 0x0000),
    "SquareIn" => (0x0000, 0x0000),
    "SquareInt" => (0x0000, 0x0000),
    "SquareInte" => (0x0000, 0x0000),
    "SquareInter" => (0x0000, 0x0000),
    "SquareInters" => (0x0000, 0x0000),
    "SquareInterse" => (0x0000, 0x0000),
    "SquareIntersec" => (0x0000, 0x0000),
    "SquareIntersect" => (0x0000, 0x0000),
    "SquareIntersecti" => (0x0000, 0x0000),
    "SquareIntersectio" => (0x0000, 0x0000),
    "SquareIntersection" => (0x0000, 0x0000),
    "SquareIntersection;" => (0x2293, 0x0000),
    "SquareS" => (0x0000, 0x0000),
    "SquareSu" => (0x0000, 0x0000),
    "SquareSub" => (0x0000, 0x0000),
    "SquareSubs" => (0x0000, 0x0000),
    "SquareSubse" => (0x0000, 0x0000),
    "SquareSubset" => (0x0000, 0x0000),
    "SquareSubset;" => (0x228F, 0x0000),
    "SquareSubsetE" => (0x0000, 0x0000),
    "SquareSubsetEq" => (0x0000, 0x0000),
    "SquareSubsetEqu" => (0x0000, 0x0000),
    "SquareSubsetEqua" => (0x0000, 0x0000),
    "SquareSubsetEqual" => (0x0000, 0x0000),
    "SquareSubsetEqual;" => (0x2291, 0x0000),
    "SquareSup" => (0x0000, 0x0000),
    "SquareSupe" => (0x0000, 0x0000),
    "SquareSuper" => (0x0000, 0x0000),
    "SquareSupers" => (0x0000, 0x0000),
    "SquareSuperse" => (0x0000, 0x0000),
    "SquareSuperset" => (0x0000, 0x0000),
    "SquareSuperset;" => (0x2290, 0x0000),
    "SquareSupersetE" => (0x0000, 0x0000),
    "SquareSupersetEq" => (0x0000, 0x0000),
    "SquareSupersetEqu" => (0x0000, 0x0000),
    "SquareSupersetEqua" => (0x0000, 0x0000),
    "SquareSupersetEqual" => (0x0000, 0x0000),
    "SquareSupersetEqual;" => (0x2292, 0x0000),
    "SquareU" => (0x0000, 0x0000),
    "SquareUn" => (0x0000, 0x0000),
    "SquareUni" => (0x0000, 0x0000),
    "SquareUnio" => (0x0000, 0x0000),
    "SquareUnion" => (0x0000, 0x0000),
    "SquareUnion;" => (0x2294, 0x0000),
    "Ss" => (0x0000, 0x0000),
    "Ssc" => (0x0000, 0x0000),
    "Sscr" => (0x0000, 0x0000),
    "Sscr;" => (0x1D4AE, 0x0000),
    "St" => (0x0000, 0x0000),
    "Sta" => (0x0000, 0x0000),
    "Star" => (0x0000, 0x0000),
    "Star;" => (0x22C6, 0x0000),
    "Su" => (0x0000, 0x0000),
    "Sub" => (0x0000, 0x0000),
    "Sub;" => (0x22D0, 0x0000),
    "Subs" => (0x0000, 0x0000),
    "Subse" => (0x0000, 0x0000),
    "Subset" => (0x0000, 0x0000),
    "Subset;" => (0x22D0, 0x0000),
    "SubsetE" => (0x0000, 0x0000),
    "SubsetEq" => (0x0000, 0x0000),
    "SubsetEqu" => (0x0000, 0x0000),
    "SubsetEqua" => (0x0000, 0x0000),
    "SubsetEqual" => (0x0000, 0x0000),
    "SubsetEqual;" => (0x2286, 0x0000),
    "Suc" => (0x0000, 0x0000),
    "Succ" => (0x0000, 0x0000),
    "Succe" => (0x0000, 0x0000),
    "Succee" => (0x0000, 0x0000),
    "Succeed" => (0x0000, 0x0000),
    "Succeeds" => (0x0000, 0x0000),
    "Succeeds;" => (0x227B, 0x0000),
    "SucceedsE" => (0x0000, 0x0000),
    "SucceedsEq" => (0x0000, 0x0000),
    "SucceedsEqu" => (0x0000, 0x0000),
    "SucceedsEqua" => (0x0000, 0x0000),
    "SucceedsEqual" => (0x0000, 0x0000),
    "SucceedsEqual;" => (0x2AB0, 0x0000),
    "SucceedsS" => (0x0000, 0x0000),
    "SucceedsSl" => (0x0000, 0x0000),
    "SucceedsSla" => (0x0000, 0x0000),
    "SucceedsSlan" => (0x0000, 0x0000),
    "SucceedsSlant" => (0x0000, 0x0000),
    "SucceedsSlantE" => (0x0000, 0x0000),
    "SucceedsSlantEq" => (0x0000, 0x0000),
    "SucceedsSlantEqu" => (0x0000, 0x0000),
    "SucceedsSlantEqua" => (0x0000, 0x0000),
    "SucceedsSlantEqual" => (0x0000, 0x0000),
    "SucceedsSlantEqual;" => (0x227D, 0x0000),
    "SucceedsT" => (0x0000, 0x0000),
    "SucceedsTi" => (0x0000, 0x0000),
    "SucceedsTil" => (0x0000, 0x0000),
    "SucceedsTild" => (0x0000, 0x0000),
    "SucceedsTilde" => (0x0000, 0x0000),
    "SucceedsTilde;" => (0x227F, 0x0000),
    "Such" => (0x0000, 0x0000),
    "SuchT" => (0x0000, 0x0000),
    "SuchTh" => (0x0000, 0x0000),
    "SuchTha" => (0x0000, 0x0000),
    "SuchThat" => (0x0000, 0x0000),
    "SuchThat;" => (0x220B, 0x0000),
    "Sum" => (0x0000, 0x0000),
    "Sum;" => (0x2211, 0x0000),
    "Sup" => (0x0000, 0x0000),
    "Sup;" => (0x22D1, 0x0000),
    "Supe" => (0x0000, 0x0000),
    "Super" => (0x0000, 0x0000),
    "Supers" => (0x0000, 0x0000),
    "Superse" => (0x0000, 0x0000),
    "Superset" => (0x0000, 0x0000),
    "Superset;" => (0x2283, 0x0000),
    "SupersetE" => (0x0000, 0x0000),
    "SupersetEq" => (0x0000, 0x0000),
    "SupersetEqu" => (0x0000, 0x0000),
    "SupersetEqua" => (0x0000, 0x0000),
    "SupersetEqual" => (0x0000, 0x0000),
    "SupersetEqual;" => (0x2287, 0x0000),
    "Sups" => (0x0000, 0x0000),
    "Supse" => (0x0000, 0x0000),
    "Supset" => (0x0000, 0x0000),
    "Supset;" => (0x22D1, 0x0000),
    "T" => (0x0000, 0x0000),
    "TH" => (0x0000, 0x0000),
    "THO" => (0x0000, 0x0000),
    "THOR" => (0x0000, 0x0000),
    "THORN" => (0x00DE, 0x0000),
    "THORN;" => (0x00DE, 0x0000),
    "TR" => (0x0000, 0x0000),
    "TRA" => (0x0000, 0x0000),
    "TRAD" => (0x0000, 0x0000),
    "TRADE" => (0x0000, 0x0000),
    "TRADE;" => (0x2122, 0x0000),
    "TS" => (0x0000, 0x0000),
    "TSH" => (0x0000, 0x0000),
    "TSHc" => (0x0000, 0x0000),
    "TSHcy" => (0x0000, 0x0000),
    "TSHcy;" => (0x040B, 0x0000),
    "TSc" => (0x0000, 0x0000),
    "TScy" => (0x0000, 0x0000),
    "TScy;" => (0x0426, 0x0000),
    "Ta" => (0x0000, 0x0000),
    "Tab" => (0x0000, 0x0000),
    "Tab;" => (0x0009, 0x0000),
    "Tau" => (0x0000, 0x0000),
    "Tau;" => (0x03A4, 0x0000),
    "Tc" => (0x0000, 0x0000),
    "Tca" => (0x0000, 0x0000),
    "Tcar" => (0x0000, 0x0000),
    "Tcaro" => (0x0000, 0x0000),
    "Tcaron" => (0x0000, 0x0000),
    "Tcaron;" => (0x0164, 0x0000),
    "Tce" => (0x0000, 0x0000),
    "Tced" => (0x0000, 0x0000),
    "Tcedi" => (0x0000, 0x0000),
    "Tcedil" => (0x0000, 0x0000),
    "Tcedil;" => (0x0162, 0x0000),
    "Tcy" => (0x0000, 0x0000),
    "Tcy;" => (0x0422, 0x0000),
    "Tf" => (0x0000, 0x0000),
    "Tfr" => (0x0000, 0x0000),
    "Tfr;" => (0x1D517, 0x0000),
    "Th" => (0x0000, 0x0000),
    "The" => (0x0000, 0x0000),
    "Ther" => (0x0000, 0x0000),
    "There" => (0x0000, 0x0000),
    "Theref" => (0x0000, 0x0000),
    "Therefo" => (0x0000, 0x0000),
    "Therefor" => (0x0000, 0x0000),
    "Therefore" => (0x0000, 0x0000),
    "Therefore;" => (0x2234, 0x0000),
    "Thet" => (0x0000, 0x0000),
    "Theta" => (0x0000, 0x0000),
    "Theta;" => (0x0398, 0x0000),
    "Thi" => (0x0000, 0x0000),
    "Thic" => (0x0000, 0x0000),
    "Thick" => (0x0000, 0x0000),
    "ThickS" => (0x0000, 0x0000),
    "ThickSp" => (0x0000, 0x0000),
    "ThickSpa" => (0x0000, 0x0000),
    "ThickSpac" => (0x0000, 0x0000),
    "ThickSpace" => (0x0000, 0x0000),
    "ThickSpace;" => (0x205F, 0x200A),
    "Thin" => (0x0000, 0x0000),
    "ThinS" => (0x0000, 0x0000),
    "ThinSp" => (0x0000, 0x0000),
    "ThinSpa" => (0x0000, 0x0000),
    "ThinSpac" => (0x0000, 0x0000),
    "ThinSpace" => (0x0000, 0x0000),
    "ThinSpace;" => (0x2009, 0x0000),
    "Ti" => (0x0000, 0x0000),
    "Til" => (0x0000, 0x0000),
    "Tild" => (0x0000, 0x0000),
    "Tilde" => (0x0000, 0x0000),
    "Tilde;" => (0x223C, 0x0000),
    "TildeE" => (0x0000, 0x0000),
    "TildeEq" => (0x0000, 0x0000),
    "TildeEqu" => (0x0000, 0x0000),
    "TildeEqua" => (0x0000, 0x0000),
    "TildeEqual" => (0x0000, 0x0000),
    "TildeEqual;" => (0x2243, 0x0000),
    "TildeF" => (0x0000, 0x0000),
    "TildeFu" => (0x0000, 0x0000),
    "TildeFul" => (0x0000, 0x0000),
    "TildeFull" => (0x0000, 0x0000),
    "TildeFullE" => (0x0000, 0x0000),
    "TildeFullEq" => (0x0000, 0x0000),
    "TildeFullEqu" => (0x0000, 0x0000),
    "TildeFullEqua" => (0x0000, 0x0000),
    "TildeFullEqual" => (0x0000, 0x0000),
    "TildeFullEqual;" => (0x2245, 0x0000),
    "TildeT" => (0x0000, 0x0000),
    "TildeTi" => (0x0000, 0x0000),
    "TildeTil" => (0x0000, 0x0000),
    "TildeTild" => (0x0000, 0x0000),
    "TildeTilde" => (0x0000, 0x0000),
    "TildeTilde;" => (0x2248, 0x0000),
    "To" => (0x0000, 0x0000),
    "Top" => (0x0000, 0x0000),
    "Topf" => (0x0000, 0x0000),
    "Topf;" => (0x1D54B, 0x0000),
    "Tr" => (0x0000, 0x0000),
    "Tri" => (0x0000, 0x0000),
    "Trip" => (0x0000, 0x0000),
    "Tripl" => (0x0000, 0x0000),
    "Triple" => (0x0000, 0x0000),
    "TripleD" => (0x0000, 0x0000),
    "TripleDo" => (0x0000, 0x0000),
    "TripleDot" => (0x0000, 0x0000),
    "TripleDot;" => (0x20DB, 0x0000),
    "Ts" => (0x0000, 0x0000),
    "Tsc" => (0x0000, 0x0000),
    "Tscr" => (0x0000, 0x0000),
    "Tscr;" => (0x1D4AF, 0x0000),
    "Tst" => (0x0000, 0x0000),
    "Tstr" => (0x0000, 0x0000),
    "Tstro" => (0x0000, 0x0000),
    "Tstrok" => (0x0000, 0x0000),
    "Tstrok;" => (0x0166, 0x0000),
    "U" => (0x0000, 0x0000),
    "Ua" => (0x0000, 0x0000),
    "Uac" => (0x0000, 0x0000),
    "Uacu" => (0x0000, 0x0000),
    "Uacut" => (0x0000, 0x0000),
    "Uacute" => (0x00DA, 0x0000),
    "Uacute;" => (0x00DA, 0x0000),
    "Uar" => (0x0000, 0x0000),
    "Uarr" => (0x0000, 0x0000),
    "Uarr;" => (0x219F, 0x0000),
    "Uarro" => (0x0000, 0x0000),
    "Uarroc" => (0x0000, 0x0000),
    "Uarroci" => (0x0000, 0x0000),
    "Uarrocir" => (0x0000, 0x0000),
    "Uarrocir;" => (0x2949, 0x0000),
    "Ub" => (0x0000, 0x0000),
    "Ubr" => (0x0000, 0x0000),
    "Ubrc" => (0x0000, 0x0000),
    "Ubrcy" => (0x0000, 0x0000),
    "Ubrcy;" => (0x040E, 0x0000),
    "Ubre" => (0x0000, 0x0000),
    "Ubrev" => (0x0000, 0x0000),
    "Ubreve" => (0x0000, 0x0000),
    "Ubreve;" => (0x016C, 0x0000),
    "Uc" => (0x0000, 0x0000),
    "Uci" => (0x0000, 0x0000),
    "Ucir" => (0x0000, 0x0000),
    "Ucirc" => (0x00DB, 0x0000),
    "Ucirc;" => (0x00DB, 0x0000),
    "Ucy" => (0x0000, 0x0000),
    "Ucy;" => (0x0423, 0x0000),
    "Ud" => (0x0000, 0x0000),
    "Udb" => (0x0000, 0x0000),
    "Udbl" => (0x0000, 0x0000),
    "Udbla" => (0x0000, 0x0000),
    "Udblac" => (0x0000, 0x0000),
    "Udblac;" => (0x0170, 0x0000),
    "Uf" => (0x0000, 0x0000),
    "Ufr" => (0x0000, 0x0000),
    "Ufr;" => (0x1D518, 0x0000),
    "Ug" => (0x0000, 0x0000),
    "Ugr" => (0x0000, 0x0000),
    "Ugra" => (0x0000, 0x0000),
    "Ugrav" => (0x0000, 0x0000),
    "Ugrave" => (0x00D9, 0x0000),
    "Ugrave;" => (0x00D9, 0x0000),
    "Um" => (0x0000, 0x0000),
    "Uma" => (0x0000, 0x0000),
    "Umac" => (0x0000, 0x0000),
    "Umacr" => (0x0000, 0x0000),
    "Umacr;" => (0x016A, 0x0000),
    "Un" => (0x0000, 0x0000),
    "Und" => (0x0000, 0x0000),
    "Unde" => (0x0000, 0x0000),
    "Under" => (0x0000, 0x0000),
    "UnderB" => (0x0000, 0x0000),
    "UnderBa" => (0x0000, 0x0000),
    "UnderBar" => (0x0000, 0x0000),
    "UnderBar;" => (0x005F, 0x0000),
    "UnderBr" => (0x0000, 0x0000),
    "UnderBra" => (0x0000, 0x0000),
    "UnderBrac" => (0x0000, 0x0000),
    "UnderBrace" => (0x0000, 0x0000),
    "UnderBrace;" => (0x23DF, 0x0000),
    "UnderBrack" => (0x0000, 0x0000),
    "UnderBracke" => (0x0000, 0x0000),
    "UnderBracket" => (0x0000, 0x0000),
    "UnderBracket;" => (0x23B5, 0x0000),
    "UnderP" => (0x0000, 0x0000),
    "UnderPa" => (0x0000, 0x0000),
    "UnderPar" => (0x0000, 0x0000),
    "UnderPare" => (0x0000, 0x0000),
    "UnderParen" => (0x0000, 0x0000),
    "UnderParent" => (0x0000, 0x0000),
    "UnderParenth" => (0x0000, 0x0000),
    "UnderParenthe" => (0x0000, 0x0000),
    "UnderParenthes" => (0x0000, 0x0000),
    "UnderParenthesi" => (0x0000, 0x0000),
    "UnderParenthesis" => (0x0000, 0x0000),
    "UnderParenthesis;" => (0x23DD, 0x0000),
    "Uni" => (0x0000, 0x0000),
    "Unio" => (0x0000, 0x0000),
    "Union" => (0x0000, 0x0000),
    "Union;" => (0x22C3, 0x0000),
    "UnionP" => (0x0000, 0x0000),
    "UnionPl" => (0x0000, 0x0000),
    "UnionPlu" => (0x0000, 0x0000),
    "UnionPlus" => (0x0000, 0x0000),
    "UnionPlus;" => (0x228E, 0x0000),
    "Uo" => (0x0000, 0x0000),
    "Uog" => (0x0000, 0x0000),
    "Uogo" => (0x0000, 0x0000),
    "Uogon" => (0x0000, 0x0000),
    "Uogon;" => (0x0172, 0x0000),
    "Uop" => (0x0000, 0x0000),
    "Uopf" => (0x0000, 0x0000),
    "Uopf;" => (0x1D54C, 0x0000),
    "Up" => (0x0000, 0x0000),
    "UpA" => (0x0000, 0x0000),
    "UpAr" => (0x0000, 0x0000),
    "UpArr" => (0x0000, 0x0000),
    "UpArro" => (0x0000, 0x0000),
    "UpArrow" => (0x0000, 0x0000),
    "UpArrow;" => (0x2191, 0x0000),
    "UpArrowB" => (0x0000, 0x0000),
    "UpArrowBa" => (0x0000, 0x0000),
    "UpArrowBar" => (0x0000, 0x0000),
    "UpArrowBar;" => (0x2912, 0x0000),
    "UpArrowD" => (0x0000, 0x0000),
    "UpArrowDo" => (0x0000, 0x0000),
    "UpArrowDow" => (0x0000, 0x0000),
    "UpArrowDown" => (0x0000, 0x0000),
    "UpArrowDownA" => (0x0000, 0x0000),
    "UpArrowDownAr" => (0x0000, 0x0000),
    "UpArrowDownArr" => (0x0000, 0x0000),
    "UpArrowDownArro" => (0x0000, 0x0000),
    "UpArrowDownArrow" => (0x0000, 0x0000),
    "UpArrowDownArrow;" => (0x21C5, 0x0000),
    "UpD" => (0x0000, 0x0000),
    "UpDo" => (0x0000, 0x0000),
    "UpDow" => (0x0000, 0x0000),
    "UpDown" => (0x0000, 0x0000),
    "UpDownA" => (0x0000, 0x0000),
    "UpDownAr" => (0x0000, 0x0000),
    "UpDownArr" => (0x0000, 0x0000),
    "UpDownArro" => (0x0000, 0x0000),
    "UpDownArrow" => (0x0000, 0x0000),
    "UpDownArrow;" => (0x2195, 0x0000),
    "UpE" => (0x0000, 0x0000),
    "UpEq" => (0x0000, 0x0000),
    "UpEqu" => (0x0000, 0x0000),
    "UpEqui" => (0x0000, 0x0000),
    "UpEquil" => (0x0000, 0x0000),
    "UpEquili" => (0x0000, 0x0000),
    "UpEquilib" => (0x0000, 0x0000),
    "UpEquilibr" => (0x0000, 0x0000),
    "UpEquilibri" => (0x0000, 0x0000),
    "UpEquilibriu" => (0x0000, 0x0000),
    "UpEquilibrium" => (0x0000, 0x0000),
    "UpEquilibrium;" => (0x296E, 0x0000),
    "UpT" => (0x0000, 0x0000),
    "UpTe" => (0x0000, 0x0000),
    "UpTee" => (0x0000, 0x0000),
    "UpTee;" => (0x22A5, 0x0000),
    "UpTeeA" => (0x0000, 0x0000),
    "UpTeeAr" => (0x0000, 0x0000),
    "UpTeeArr" => (0x0000, 0x0000),
    "UpTeeArro" => (0x0000, 0x0000),
    "UpTeeArrow" => (0x0000, 0x0000),
    "UpTeeArrow;" => (0x21A5, 0x0000),
    "Upa" => (0x0000, 0x0000),
    "Upar" => (0x0000, 0x0000),
    "Uparr" => (0x0000, 0x0000),
    "Uparro" => (0x0000, 0x0000),
    "Uparrow" => (0x0000, 0x0000),
    "Uparrow;" => (0x21D1, 0x0000),
    "Upd" => (0x0000, 0x0000),
    "Updo" => (0x0000, 0x0000),
    "Updow" => (0x0000, 0x0000),
    "Updown" => (0x0000, 0x0000),
    "Updowna" => (0x0000, 0x0000),
    "Updownar" => (0x0000, 0x0000),
    "Updownarr" => (0x0000, 0x0000),
    "Updownarro" => (0x0000, 0x0000),
    "Updownarrow" => (0x0000, 0x0000),
    "Updownarrow;" => (0x21D5, 0x0000),
    "Upp" => (0x0000, 0x0000),
    "Uppe" => (0x0000, 0x0000),
    "Upper" => (0x0000, 0x0000),
    "UpperL" => (0x0000, 0x0000),
    "UpperLe" => (0x0000, 0x0000),
    "UpperLef" => (0x0000, 0x0000),
    "UpperLeft" => (0x0000, 0x0000),
    "UpperLeftA" => (0x0000, 0x0000),
    "UpperLeftAr" => (0x0000, 0x0000),
    "UpperLeftArr" => (0x0000, 0x0000),
    "UpperLeftArro" => (0x0000, 0x0000),
    "UpperLeftArrow" => (0x0000, 0x0000),
    "UpperLeftArrow;" => (0x2196, 0x0000),
    "UpperR" => (0x0000, 0x0000),
    "UpperRi" => (0x0000, 0x0000),
    "UpperRig" => (0x0000, 0x0000),
    "UpperRigh" => (0x0000, 0x0000),
    "UpperRight" => (0x0000, 0x0000),
    "UpperRightA" => (0x0000, 0x0000),
    "UpperRightAr" => (0x0000, 0x0000),
    "UpperRightArr" => (0x0000, 0x0000),
    "UpperRightArro" => (0x0000, 0x0000),
    "UpperRightArrow" => (0x0000, 0x0000),
    "UpperRightArrow;" => (0x2197, 0x0000),
    "Ups" => (0x0000, 0x0000),
    "Upsi" => (0x0000, 0x0000),
    "Upsi;" => (0x03D2, 0x0000),
    "Upsil" => (0x0000, 0x0000),
    "Upsilo" => (0x0000, 0x0000),
    "Upsilon" => (0x0000, 0x0000),
    "Upsilon;" => (0x03A5, 0x0000),
    "Ur" => (0x0000, 0x0000),
    "Uri" => (0x0000, 0x0000),
    "Urin" => (0x0000, 0x0000),
    "Uring" => (0x0000, 0x0000),
    "Uring;" => (0x016E, 0x0000),
    "Us" => (0x0000, 0x0000),
    "Usc" => (0x0000, 0x0000),
    "Uscr" => (0x0000, 0x0000),
    "Uscr;" => (0x1D4B0, 0x0000),
    "Ut" => (0x0000, 0x0000),
    "Uti" => (0x0000, 0x0000),
    "Util" => (0x0000, 0x0000),
    "Utild" => (0x0000, 0x0000),
    "Utilde" => (0x0000, 0x0000),
    "Utilde;" => (0x0168, 0x0000),
    "Uu" => (0x0000, 0x0000),
    "Uum" => (0x0000, 0x0000),
    "Uuml" => (0x00DC, 0x0000),
    "Uuml;" => (0x00DC, 0x0000),
    "V" => (0x0000, 0x0000),
    "VD" => (0x0000, 0x0000),
    "VDa" => (0x0000, 0x0000),
    "VDas" => (0x0000, 0x0000),
    "VDash" => (0x0000, 0x0000),
    "VDash;" => (0x22AB, 0x0000),
    "Vb" => (0x0000, 0x0000),
    "Vba" => (0x0000, 0x0000),
    "Vbar" => (0x0000, 0x0000),
    "Vbar;" => (0x2AEB, 0x0000),
    "Vc" => (0x0000, 0x0000),
    "Vcy" => (0x0000, 0x0000),
    "Vcy;" => (0x0412, 0x0000),
    "Vd" => (0x0000, 0x0000),
    "Vda" => (0x0000, 0x0000),
    "Vdas" => (0x0000, 0x0000),
    "Vdash" => (0x0000, 0x0000),
    "Vdash;" => (0x22A9, 0x0000),
    "Vdashl" => (0x0000, 0x0000),
    "Vdashl;" => (0x2AE6, 0x0000),
    "Ve" => (0x0000, 0x0000),
    "Vee" => (0x0000, 0x0000),
    "Vee;" => (0x22C1, 0x0000),
    "Ver" => (0x0000, 0x0000),
    "Verb" => (0x0000, 0x0000),
    "Verba" => (0x0000, 0x0000),
    "Verbar" => (0x0000, 0x0000),
    "Verbar;" => (0x2016, 0x0000),
    "Vert" => (0x0000, 0x0000),
    "Vert;" => (0x2016, 0x0000),
    "Verti" => (0x0000, 0x0000),
    "Vertic" => (0x0000, 0x0000),
    "Vertica" => (0x0000, 0x0000),
    "Vertical" => (0x0000, 0x0000),
    "VerticalB" => (0x0000, 0x0000),
    "VerticalBa" => (0x0000, 0x0000),
    "VerticalBar" => (0x0000, 0x0000),
    "VerticalBar;" => (0x2223, 0x0000),
    "VerticalL" => (0x0000, 0x0000),
    "VerticalLi" => (0x0000, 0x0000),
    "VerticalLin" => (0x0000, 0x0000),
    "VerticalLine" => (0x0000, 0x0000),
    "VerticalLine;" => (0x007C, 0x0000),
    "VerticalS" => (0x0000, 0x0000),
    "VerticalSe" => (0x0000, 0x0000),
    "VerticalSep" => (0x0000, 0x0000),
    "VerticalSepa" => (0x0000, 0x0000),
    "VerticalSepar" => (0x0000, 0x0000),
    "VerticalSepara" => (0x0000, 0x0000),
    "VerticalSeparat" => (0x0000, 0x0000),
    "VerticalSeparato" => (0x0000, 0x0000),
    "VerticalSeparator" => (0x0000, 0x0000),
    "VerticalSeparator;" => (0x2758, 0x0000),
    "VerticalT" => (0x0000, 0x0000),
    "VerticalTi" => (0x0000, 0x0000),
    "VerticalTil" => (0x0000, 0x0000),
    "VerticalTild" => (0x0000, 0x0000),
    "VerticalTilde" => (0x0000, 0x0000),
    "VerticalTilde;" => (0x2240, 0x0000),
    "Very" => (0x0000, 0x0000),
    "VeryT" => (0x0000, 0x0000),
    "VeryTh" => (0x0000, 0x0000),
    "VeryThi" => (0x0000, 0x0000),
    "VeryThin" => (0x0000, 0x0000),
    "VeryThinS" => (0x0000, 0x0000),
    "VeryThinSp" => (0x0000, 0x0000),
    "VeryThinSpa" => (0x0000, 0x0000),
    "VeryThinSpac" => (0x0000, 0x0000),
    "VeryThinSpace" => (0x0000, 0x0000),
    "VeryThinSpace;" => (0x200A, 0x0000),
    "Vf" => (0x0000, 0x0000),
    "Vfr" => (0x0000, 0x0000),
    "Vfr;" => (0x1D519, 0x0000),
    "Vo" => (0x0000, 0x0000),
    "Vop" => (0x0000, 0x0000),
    "Vopf" => (0x0000, 0x0000),
    "Vopf;" => (0x1D54D, 0x0000),
    "Vs" => (0x0000, 0x0000),
    "Vsc" => (0x0000, 0x0000),
    "Vscr" => (0x0000, 0x0000),
    "Vscr;" => (0x1D4B1, 0x0000),
    "Vv" => (0x0000, 0x0000),
    "Vvd" => (0x0000, 0x0000),
    "Vvda" => (0x0000, 0x0000),
    "Vvdas" => (0x0000, 0x0000),
    "Vvdash" => (0x0000, 0x0000),
    "Vvdash;" => (0x22AA, 0x0000),
    "W" => (0x0000, 0x0000),
    "Wc" => (0x0000, 0x0000),
    "Wci" => (0x0000, 0x0000),
    "Wcir" => (0x0000, 0x0000),
    "Wcirc" => (0x0000, 0x0000),
    "Wcirc;" => (0x0174, 0x0000),
    "We" => (0x0000, 0x0000),
    "Wed" => (0x0000, 0x0000),
    "Wedg" => (0x0000, 0x0000),
    "Wedge" => (0x0000, 0x0000),
    "Wedge;" => (0x22C0, 0x0000),
    "Wf" => (0x0000, 0x0000),
    "Wfr" => (0x0000, 0x0000),
    "Wfr;" => (0x1D51A, 0x0000),
    "Wo" => (0x0000, 0x0000),
    "Wop" => (0x0000, 0x0000),
    "Wopf" => (0x0000, 0x0000),
    "Wopf;" => (0x1D54E, 0x0000),
    "Ws" => (0x0000, 0x0000),
    "Wsc" => (0x0000, 0x0000),
    "Wscr" => (0x0000, 0x0000),
    "Wscr;" => (0x1D4B2, 0x0000),
    "X" => (0x0000, 0x0000),
    "Xf" => (0x0000, 0x0000),
    "Xfr" => (0x0000, 0x0000),
    "Xfr;" => (0x1D51B, 0x0000),
    "Xi" => (0x0000, 0x0000),
    "Xi;" => (0x039E, 0x0000),
    "Xo" => (0x0000, 0x0000),
    "Xop" => (0x0000, 0x0000),
    "Xopf" => (0x0000, 0x0000),
    "Xopf;" => (0x1D54F, 0x0000),
    "Xs" => (0x0000, 0x0000),
    "Xsc" => (0x0000, 0x0000),
    "Xscr" => (0x0000, 0x0000),
    "Xscr;" => (0x1D4B3, 0x0000),
    "Y" => (0x0000, 0x0000),
    "YA" => (0x0000, 0x0000),
    "YAc" => (0x0000, 0x0000),
    "YAcy" => (0x0000, 0x0000),
    "YAcy;" => (0x042F, 0x0000),
    "YI" => (0x0000, 0x0000),
    "YIc" => (0x0000, 0x0000),
    "YIcy" => (0x0000, 0x0000),
    "YIcy;" => (0x0407, 0x0000),
    "YU" => (0x0000, 0x0000),
    "YUc" => (0x0000, 0x0000),
    "YUcy" => (0x0000, 0x0000),
    "YUcy;" => (0x042E, 0x0000),
    "Ya" => (0x0000, 0x0000),
    "Yac" => (0x0000, 0x0000),
    "Yacu" => (0x0000, 0x0000),
    "Yacut" => (0x0000, 0x0000),
    "Yacute" => (0x00DD, 0x0000),
    "Yacute;" => (0x00DD, 0x0000),
    "Yc" => (0x0000, 0x0000),
    "Yci" => (0x0000, 0x0000),
    "Ycir" => (0x0000, 0x0000),
    "Ycirc" => (0x0000, 0x0000),
    "Ycirc;" => (0x0176, 0x0000),
    "Ycy" => (0x0000, 0x0000),
    "Ycy;" => (0x042B, 0x0000),
    "Yf" => (0x0000, 0x0000),
    "Yfr" => (0x0000, 0x0000),
    "Yfr;" => (0x1D51C, 0x0000),
    "Yo" => (0x0000, 0x0000),
    "Yop" => (0x0000, 0x0000),
    "Yopf" => (0x0000, 0x0000),
    "Yopf;" => (0x1D550, 0x0000),
    "Ys" => (0x0000, 0x0000),
    "Ysc" => (0x0000, 0x0000),
    "Yscr" => (0x0000, 0x0000),
    "Yscr;" => (0x1D4B4, 0x0000),
    "Yu" => (0x0000, 0x0000),
    "Yum" => (0x0000, 0x0000),
    "Yuml" => (0x0000, 0x0000),
    "Yuml;" => (0x0178, 0x0000),
    "Z" => (0x0000, 0x0000),
    "ZH" => (0x0000, 0x0000),
    "ZHc" => (0x0000, 0x0000),
    "ZHcy" => (0x0000, 0x0000),
    "ZHcy;" => (0x0416, 0x0000),
    "Za" => (0x0000, 0x0000),
    "Zac" => (0x0000, 0x0000),
    "Zacu" => (0x0000, 0x0000),
    "Zacut" => (0x0000, 0x0000),
    "Zacute" => (0x0000, 0x0000),
    "Zacute;" => (0x0179, 0x0000),
    "Zc" => (0x0000, 0x0000),
    "Zca" => (0x0000, 0x0000),
    "Zcar" => (0x0000, 0x0000),
    "Zcaro" => (0x0000, 0x0000),
    "Zcaron" => (0x0000, 0x0000),
    "Zcaron;" => (0x017D, 0x0000),
    "Zcy" => (0x0000, 0x0000),
    "Zcy;" => (0x0417, 0x0000),
    "Zd" => (0x0000, 0x0000),
    "Zdo" => (0x0000, 0x0000),
    "Zdot" => (0x0000, 0x0000),
    "Zdot;" => (0x017B, 0x0000),
    "Ze" => (0x0000, 0x0000),
    "Zer" => (0x0000, 0x0000),
    "Zero" => (0x0000, 0x0000),
    "ZeroW" => (0x0000, 0x0000),
    "ZeroWi" => (0x0000, 0x0000),
    "ZeroWid" => (0x0000, 0x0000),
    "ZeroWidt" => (0x0000, 0x0000),
    "ZeroWidth" => (0x0000, 0x0000),
    "ZeroWidthS" => (0x0000, 0x0000),
    "ZeroWidthSp" => (0x0000, 0x0000),
    "ZeroWidthSpa" => (0x0000, 0x0000),
    "ZeroWidthSpac" => (0x0000, 0x0000),
    "ZeroWidthSpace" => (0x0000, 0x0000),
    "ZeroWidthSpace;" => (0x200B, 0x0000),
    "Zet" => (0x0000, 0x0000),
    "Zeta" => (0x0000, 0x0000),
    "Zeta;" => (0x0396, 0x0000),
    "Zf" => (0x0000, 0x0000),
    "Zfr" => (0x0000, 0x0000),
    "Zfr;" => (0x2128, 0x0000),
    "Zo" => (0x0000, 0x0000),
    "Zop" => (0x0000, 0x0000),
    "Zopf" => (0x0000, 0x0000),
    "Zopf;" => (0x2124, 0x0000),
    "Zs" => (0x0000, 0x0000),
    "Zsc" => (0x0000, 0x0000),
    "Zscr" => (0x0000, 0x0000),
    "Zscr;" => (0x1D4B5, 0x0000),
    "a" => (0x0000, 0x0000),
    "aa" => (0x0000, 0x0000),
    "aac" => (0x0000, 0x0000),
    "aacu" => (0x0000, 0x0000),
    "aacut" => (0x0000, 0x0000),
    "aacute" => (0x00E1, 0x0000),
    "aacute;" => (0x00E1, 0x0000),
    "ab" => (0x0000, 0x0000),
    "abr" => (0x0000, 0x0000),
    "abre" => (0x0000, 0x0000),
    "abrev" => (0x0000, 0x0000),
    "abreve" => (0x0000, 0x0000),
    "abreve;" => (0x0103, 0x0000),
    "ac" => (0x0000, 0x0000),
    "ac;" => (0x223E, 0x0000),
    "acE" => (0x0000, 0x0000),
    "acE;" => (0x223E, 0x0333),
    "acd" => (0x0000, 0x0000),
    "acd;" => (0x223F, 0x0000),
    "aci" => (0x0000, 0x0000),
    "acir" => (0x0000, 0x0000),
    "acirc" => (0x00E2, 0x0000),
    "acirc;" => (0x00E2, 0x0000),
    "acu" => (0x0000, 0x0000),
    "acut" => (0x0000, 0x0000),
    "acute" => (0x00B4, 0x0000),
    "acute;" => (0x00B4, 0x0000),
    "acy" => (0x0000, 0x0000),
    "acy;" => (0x0430, 0x0000),
    "ae" => (0x0000, 0x0000),
    "ael" => (0x0000, 0x0000),
    "aeli" => (0x0000, 0x0000),
    "aelig" => (0x00E6, 0x0000),
    "aelig;" => (0x00E6, 0x0000),
    "af" => (0x0000, 0x0000),
    "af;" => (0x2061, 0x0000),
    "afr" => (0x0000, 0x0000),
    "afr;" => (0x1D51E, 0x0000),
    "ag" => (0x0000, 0x0000),
    "agr" => (0x0000, 0x0000),
    "agra" => (0x0000, 0x0000),
    "agrav" => (0x0000, 0x0000),
    "agrave" => (0x00E0, 0x0000),
    "agrave;" => (0x00E0, 0x0000),
    "al" => (0x0000, 0x0000),
    "ale" => (0x0000, 0x0000),
    "alef" => (0x0000, 0x0000),
    "alefs" => (0x0000, 0x0000),
    "alefsy" => (0x0000, 0x0000),
    "alefsym" => (0x0000, 0x0000),
    "alefsym;" => (0x2135, 0x0000),
    "alep" => (0x0000, 0x0000),
    "aleph" => (0x0000, 0x0000),
    "aleph;" => (0x2135, 0x0000),
    "alp" => (0x0000, 0x0000),
    "alph" => (0x0000, 0x0000),
    "alpha" => (0x0000, 0x0000),
    "alpha;" => (0x03B1, 0x0000),
    "am" => (0x0000, 0x0000),
    "ama" => (0x0000, 0x0000),
    "amac" => (0x0000, 0x0000),
    "amacr" => (0x0000, 0x0000),
    "amacr;" => (0x0101, 0x0000),
    "amal" => (0x0000, 0x0000),
    "amalg" => (0x0000, 0x0000),
    "amalg;" => (0x2A3F, 0x0000),
    "amp" => (0x0026, 0x0000),
    "amp;" => (0x0026, 0x0000),
    "an" => (0x0000, 0x0000),
    "and" => (0x0000, 0x0000),
    "and;" => (0x2227, 0x0000),
    "anda" => (0x0000, 0x0000),
    "andan" => (0x0000, 0x0000),
    "andand" => (0x0000, 0x0000),
    "andand;" => (0x2A55, 0x0000),
    "andd" => (0x0000, 0x0000),
    "andd;" => (0x2A5C, 0x0000),
    "ands" => (0x0000, 0x0000),
    "andsl" => (0x0000, 0x0000),
    "andslo" => (0x0000, 0x0000),
    "andslop" => (0x0000, 0x0000),
    "andslope" => (0x0000, 0x0000),
    "andslope;" => (0x2A58, 0x0000),
    "andv" => (0x0000, 0x0000),
    "andv;" => (0x2A5A, 0x0000),
    "ang" => (0x0000, 0x0000),
    "ang;" => (0x2220, 0x0000),
    "ange" => (0x0000, 0x0000),
    "ange;" => (0x29A4, 0x0000),
    "angl" => (0x0000, 0x0000),
    "angle" => (0x0000, 0x0000),
    "angle;" => (0x2220, 0x0000),
    "angm" => (0x0000, 0x0000),
    "angms" => (0x0000, 0x0000),
    "angmsd" => (0x0000, 0x0000),
    "angmsd;" => (0x2221, 0x0000),
    "angmsda" => (0x0000, 0x0000),
    "angmsdaa" => (0x0000, 0x0000),
    "angmsdaa;" => (0x29A8, 0x0000),
    "angmsdab" => (0x0000, 0x0000),
    "angmsdab;" => (0x29A9, 0x0000),
    "angmsdac" => (0x0000, 0x0000),
    "angmsdac;" => (0x29AA, 0x0000),
    "angmsdad" => (0x0000, 0x0000),
    "angmsdad;" => (0x29AB, 0x0000),
    "angmsdae" => (0x0000, 0x0000),
    "angmsdae;" => (0x29AC, 0x0000),
    "angmsdaf" => (0x0000, 0x0000),
    "angmsdaf;" => (0x29AD, 0x0000),
    "angmsdag" => (0x0000, 0x0000),
    "angmsdag;" => (0x29AE, 0x0000),
    "angmsdah" => (0x0000, 0x0000),
    "angmsdah;" => (0x29AF, 0x0000),
    "angr" => (0x0000, 0x0000),
    "angrt" => (0x0000, 0x0000),
    "angrt;" => (0x221F, 0x0000),
    "angrtv" => (0x0000, 0x0000),
    "angrtvb" => (0x0000, 0x0000),
    "angrtvb;" => (0x22BE, 0x0000),
    "angrtvbd" => (0x0000, 0x0000),
    "angrtvbd;" => (0x299D, 0x0000),
    "angs" => (0x0000, 0x0000),
    "angsp" => (0x0000, 0x0000),
    "angsph" => (0x0000, 0x0000),
    "angsph;" => (0x2222, 0x0000),
    "angst" => (0x0000, 0x0000),
    "angst;" => (0x00C5, 0x0000),
    "angz" => (0x0000, 0x0000),
    "angza" => (0x0000, 0x0000),
    "angzar" => (0x0000, 0x0000),
    "angzarr" => (0x0000, 0x0000),
    "angzarr;" => (0x237C, 0x0000),
    "ao" => (0x0000, 0x0000),
    "aog" => (0x0000, 0x0000),
    "aogo" => (0x0000, 0x0000),
    "aogon" => (0x0000, 0x0000),
    "aogon;" => (0x0105, 0x0000),
    "aop" => (0x0000, 0x0000),
    "aopf" => (0x0000, 0x0000),
    "aopf;" => (0x1D552, 0x0000),
    "ap" => (0x0000, 0x0000),
    "ap;" => (0x2248, 0x0000),
    "apE" => (0x0000, 0x0000),
    "apE;" => (0x2A70, 0x0000),
    "apa" => (0x0000, 0x0000),
    "apac" => (0x0000, 0x0000),
    "apaci" => (0x0000, 0x0000),
    "apacir" => (0x0000, 0x0000),
    "apacir;" => (0x2A6F, 0x0000),
    "ape" => (0x0000, 0x0000),
    "ape;" => (0x224A, 0x0000),
    "api" => (0x0000, 0x0000),
    "apid" => (0x0000, 0x0000),
    "apid;" => (0x224B, 0x0000),
    "apo" => (0x0000, 0x0000),
    "apos" => (0x0000, 0x0000),
    "apos;" => (0x0027, 0x0000),
    "app" => (0x0000, 0x0000),
    "appr" => (0x0000, 0x0000),
    "appro" => (0x0000, 0x0000),
    "approx" => (0x0000, 0x0000),
    "approx;" => (0x2248, 0x0000),
    "approxe" => (0x0000, 0x0000),
    "approxeq" => (0x0000, 0x0000),
    "approxeq;" => (0x224A, 0x0000),
    "ar" => (0x0000, 0x0000),
    "ari" => (0x0000, 0x0000),
    "arin" => (0x0000, 0x0000),
    "aring" => (0x00E5, 0x0000),
    "aring;" => (0x00E5, 0x0000),
    "as" => (0x0000, 0x0000),
    "asc" => (0x0000, 0x0000),
    "ascr" => (0x0000, 0x0000),
    "ascr;" => (0x1D4B6, 0x0000),
    "ast" => (0x0000, 0x0000),
    "ast;" => (0x002A, 0x0000),
    "asy" => (0x0000, 0x0000),
    "asym" => (0x0000, 0x0000),
    "asymp" => (0x0000, 0x0000),
    "asymp;" => (0x2248, 0x0000),
    "asympe" => (0x0000, 0x0000),
    "asympeq" => (0x0000, 0x0000),
    "asympeq;" => (0x224D, 0x0000),
    "at" => (0x0000, 0x0000),
    "ati" => (0x0000, 0x0000),
    "atil" => (0x0000, 0x0000),
    "atild" => (0x0000, 0x0000),
    "atilde" => (0x00E3, 0x0000),
    "atilde;" => (0x00E3, 0x0000),
    "au" => (0x0000, 0x0000),
    "aum" => (0x0000, 0x0000),
    "auml" => (0x00E4, 0x0000),
    "auml;" => (0x00E4, 0x0000),
    "aw" => (0x0000, 0x0000),
    "awc" => (0x0000, 0x0000),
    "awco" => (0x0000, 0x0000),
    "awcon" => (0x0000, 0x0000),
    "awconi" => (0x0000, 0x0000),
    "awconin" => (0x0000, 0x0000),
    "awconint" => (0x0000, 0x0000),
    "awconint;" => (0x2233, 0x0000),
    "awi" => (0x0000, 0x0000),
    "awin" => (0x0000, 0x0000),
    "awint" => (0x0000, 0x0000),
    "awint;" => (0x2A11, 0x0000),
    "b" => (0x0000, 0x0000),
    "bN" => (0x0000, 0x0000),
    "bNo" => (0x0000, 0x0000),
    "bNot" => (0x0000, 0x0000),
    "bNot;" => (0x2AED, 0x0000),
    "ba" => (0x0000, 0x0000),
    "bac" => (0x0000, 0x0000),
    "back" => (0x0000, 0x0000),
    "backc" => (0x0000, 0x0000),
    "backco" => (0x0000, 0x0000),
    "backcon" => (0x0000, 0x0000),
    "backcong" => (0x0000, 0x0000),
    "backcong;" => (0x224C, 0x0000),
    "backe" => (0x0000, 0x0000),
    "backep" => (0x0000, 0x0000),
    "backeps" => (0x0000, 0x0000),
    "backepsi" => (0x0000, 0x0000),
    "backepsil" => (0x0000, 0x0000),
    "backepsilo" => (0x0000, 0x0000),
    "backepsilon" => (0x0000, 0x0000),
    "backepsilon;" => (0x03F6, 0x0000),
    "backp" => (0x0000, 0x0000),
    "backpr" => (0x0000, 0x0000),
    "backpri" => (0x0000, 0x0000),
    "backprim" => (0x0000, 0x0000),
    "backprime" => (0x0000, 0x0000),
    "backprime;" => (0x2035, 0x0000),
    "backs" => (0x0000, 0x0000),
    "backsi" => (0x0000, 0x0000),
    "backsim" => (0x0000, 0x0000),
    "backsim;" => (0x223D, 0x0000),
    "backsime" => (0x0000, 0x0000),
    "backsimeq" => (0x0000, 0x0000),
    "backsimeq;" => (0x22CD, 0x0000),
    "bar" => (0x0000, 0x0000),
    "barv" => (0x0000, 0x0000),
    "barve" => (0x0000, 0x0000),
    "barvee" => (0x0000, 0x0000),
    "barvee;" => (0x22BD, 0x0000),
    "barw" => (0x0000, 0x0000),
    "barwe" => (0x0000, 0x0000),
    "barwed" => (0x0000, 0x0000),
    "barwed;" => (0x2305, 0x0000),
    "barwedg" => (0x0000, 0x0000),
    "barwedge" => (0x0000, 0x0000),
    "barwedge;" => (0x2305, 0x0000),
    "bb" => (0x0000, 0x0000),
    "bbr" => (0x0000, 0x0000),
    "bbrk" => (0x0000, 0x0000),
    "bbrk;" => (0x23B5, 0x0000),
    "bbrkt" => (0x0000, 0x0000),
    "bbrktb" => (0x0000, 0x0000),
    "bbrktbr" => (0x0000, 0x0000),
    "bbrktbrk" => (0x0000, 0x0000),
    "bbrktbrk;" => (0x23B6, 0x0000),
    "bc" => (0x0000, 0x0000),
    "bco" => (0x0000, 0x0000),
    "bcon" => (0x0000, 0x0000),
    "bcong" => (0x0000, 0x0000),
    "bcong;" => (0x224C, 0x0000),
    "bcy" => (0x0000, 0x0000),
    "bcy;" => (0x0431, 0x0000),
    "bd" => (0x0000, 0x0000),
    "bdq" => (0x0000, 0x0000),
    "bdqu" => (0x0000, 0x0000),
    "bdquo" => (0x0000, 0x0000),
    "bdquo;" => (0x201E, 0x0000),
    "be" => (0x0000, 0x0000),
    "bec" => (0x0000, 0x0000),
    "beca" => (0x0000, 0x0000),
    "becau" => (0x0000, 0x0000),
    "becaus" => (0x0000, 0x0000),
    "becaus;" => (0x2235, 0x0000),
    "because" => (0x0000, 0x0000),
    "because;" => (0x2235, 0x0000),
    "bem" => (0x0000, 0x0000),
    "bemp" => (0x0000, 0x0000),
    "bempt" => (0x0000, 0x0000),
    "bempty" => (0x0000, 0x0000),
    "bemptyv" => (0x0000, 0x0000),
    "bemptyv;" => (0x29B0, 0x0000),
    "bep" => (0x0000, 0x0000),
    "beps" => (0x0000, 0x0000),
    "bepsi" => (0x0000, 0x0000),
    "bepsi;" => (0x03F6, 0x0000),
    "ber" => (0x0000, 0x0000),
    "bern" => (0x0000, 0x0000),
    "berno" => (0x0000, 0x0000),
    "bernou" => (0x0000, 0x0000),
    "bernou;" => (0x212C, 0x0000),
    "bet" => (0x0000, 0x0000),
    "beta" => (0x0000, 0x0000),
    "beta;" => (0x03B2, 0x0000),
    "beth" => (0x0000, 0x0000),
    "beth;" => (0x2136, 0x0000),
    "betw" => (0x0000, 0x0000),
    "betwe" => (0x0000, 0x0000),
    "betwee" => (0x0000, 0x0000),
    "between" => (0x0000, 0x0000),
    "between;" => (0x226C, 0x0000),
    "bf" => (0x0000, 0x0000),
    "bfr" => (0x0000, 0x0000),
    "bfr;" => (0x1D51F, 0x0000),
    "bi" => (0x0000, 0x0000),
    "big" => (0x0000, 0x0000),
    "bigc" => (0x0000, 0x0000),
    "bigca" => (0x0000, 0x0000),
    "bigcap" => (0x0000, 0x0000),
    "bigcap;" => (0x22C2, 0x0000),
    "bigci" => (0x0000, 0x0000),
    "bigcir" => (0x0000, 0x0000),
    "bigcirc" => (0x0000, 0x0000),
    "bigcirc;" => (0x25EF, 0x0000),
    "bigcu" => (0x0000, 0x0000),
    "bigcup" => (0x0000, 0x0000),
    "bigcup;" => (0x22C3, 0x0000),
    "bigo" => (0x0000, 0x0000),
    "bigod" => (0x0000, 0x0000),
    "bigodo" => (0x0000, 0x0000),
    "bigodot" => (0x0000, 0x0000),
    "bigodot;" => (0x2A00, 0x0000),
    "bigop" => (0x0000, 0x0000),
    "bigopl" => (0x0000, 0x0000),
    "bigoplu" => (0x0000, 0x0000),
    "bigoplus" => (0x0000, 0x0000),
    "bigoplus;" => (0x2A01, 0x0000),
    "bigot" => (0x0000, 0x0000),
    "bigoti" => (0x0000, 0x0000),
    "bigotim" => (0x0000, 0x0000),
    "bigotime" => (0x0000, 0x0000),
    "bigotimes" => (0x0000, 0x0000),
    "bigotimes;" => (0x2A02, 0x0000),
    "bigs" => (0x0000, 0x0000),
    "bigsq" => (0x0000, 0x0000),
    "bigsqc" => (0x0000, 0x0000),
    "bigsqcu" => (0x0000, 0x0000),
    "bigsqcup" => (0x0000, 0x0000),
    "bigsqcup;" => (0x2A06, 0x0000),
    "bigst" => (0x0000, 0x0000),
    "bigsta" => (0x0000, 0x0000),
    "bigstar" => (0x0000, 0x0000),
    "bigstar;" => (0x2605, 0x0000),
    "bigt" => (0x0000, 0x0000),
    "bigtr" => (0x0000, 0x0000),
    "bigtri" => (0x0000, 0x0000),
    "bigtria" => (0x0000, 0x0000),
    "bigtrian" => (0x0000, 0x0000),
    "bigtriang" => (0x0000, 0x0000),
    "bigtriangl" => (0x0000, 0x0000),
    "bigtriangle" => (0x0000, 0x0000),
    "bigtriangled" => (0x0000, 0x0000),
    "bigtriangledo" => (0x0000, 0x0000),
    "bigtriangledow" => (0x0000, 0x0000),
    "bigtriangledown" => (0x0000, 0x0000),
    "bigtriangledown;" => (0x25BD, 0x0000),
    "bigtriangleu" => (0x0000, 0x0000),
    "bigtriangleup" => (0x0000, 0x0000),
    "bigtriangleup;" => (0x25B3, 0x0000),
    "bigu" => (0x0000, 0x0000),
    "bigup" => (0x0000, 0x0000),
    "bigupl" => (0x0000, 0x0000),
    "biguplu" => (0x0000, 0x0000),
    "biguplus" => (0x0000, 0x0000),
    "biguplus;" => (0x2A04, 0x0000),
    "bigv" => (0x0000, 0x0000),
    "bigve" => (0x0000, 0x0000),
    "bigvee" => (0x0000, 0x0000),
    "bigvee;" => (0x22C1, 0x0000),
    "bigw" => (0x0000, 0x0000),
    "bigwe" => (0x0000, 0x0000),
    "bigwed" => (0x0000, 0x0000),
    "bigwedg" => (0x0000, 0x0000),
    "bigwedge" => (0x0000, 0x0000),
    "bigwedge;" => (0x22C0, 0x0000),
    "bk" => (0x0000, 0x0000),
    "bka" => (0x0000, 0x0000),
    "bkar" => (0x0000, 0x0000),
    "bkaro" => (0x0000, 0x0000),
    "bkarow" => (0x0000, 0x0000),
    "bkarow;" => (0x290D, 0x0000),
    "bl" => (0x0000, 0x0000),
    "bla" => (0x0000, 0x0000),
    "blac" => (0x0000, 0x0000),
    "black" => (0x0000, 0x0000),
    "blackl" => (0x0000, 0x0000),
    "blacklo" => (0x0000, 0x0000),
    "blackloz" => (0x0000, 0x0000),
    "blackloze" => (0x0000, 0x0000),
    "blacklozen" => (0x0000, 0x0000),
    "blacklozeng" => (0x0000, 0x0000),
    "blacklozenge" => (0x0000, 0x0000),
    "blacklozenge;" => (0x29EB, 0x0000),
    "blacks" => (0x0000, 0x0000),
    "blacksq" => (0x0000, 0x0000),
    "blacksqu" => (0x0000, 0x0000),
    "blacksqua" => (0x0000, 0x0000),
    "blacksquar" => (0x0000, 0x0000),
    "blacksquare" => (0x0000, 0x0000),
    "blacksquare;" => (0x25AA, 0x0000),
    "blackt" => (0x0000, 0x0000),
    "blacktr" => (0x0000, 0x0000),
    "blacktri" => (0x0000, 0x0000),
    "blacktria" => (0x0000, 0x0000),
    "blacktrian" => (0x0000, 0x0000),
    "blacktriang" => (0x0000, 0x0000),
    "blacktriangl" => (0x0000, 0x0000),
    "blacktriangle" => (0x0000, 0x0000),
    "blacktriangle;" => (0x25B4, 0x0000),
    "blacktriangled" => (0x0000, 0x0000),
    "blacktriangledo" => (0x0000, 0x0000),
    "blacktriangledow" => (0x0000, 0x0000),
    "blacktriangledown" => (0x0000, 0x0000),
    "blacktriangledown;" => (0x25BE, 0x0000),
    "blacktrianglel" => (0x0000, 0x0000),
    "blacktrianglele" => (0x0000, 0x0000),
    "blacktrianglelef" => (0x0000, 0x0000),
    "blacktriangleleft" => (0x0000, 0x0000),
    "blacktriangleleft;" => (0x25C2, 0x0000),
    "blacktriangler" => (0x0000, 0x0000),
    "blacktriangleri" => (0x0000, 0x0000),
    "blacktrianglerig" => (0x0000, 0x0000),
    "blacktrianglerigh" => (0x0000, 0x0000),
    "blacktriangleright" => (0x0000, 0x0000),
    "blacktriangleright;" => (0x25B8, 0x0000),
    "blan" => (0x0000, 0x0000),
    "blank" => (0x0000, 0x0000),
    "blank;" => (0x2423, 0x0000),
    "blk" => (0x0000, 0x0000),
    "blk1" => (0x0000, 0x0000),
    "blk12" => (0x0000, 0x0000),
    "blk12;" => (0x2592, 0x0000),
    "blk14" => (0x0000, 0x0000),
    "blk14;" => (0x2591, 0x0000),
    "blk3" => (0x0000, 0x0000),
    "blk34" => (0x0000, 0x0000),
    "blk34;" => (0x2593, 0x0000),
    "blo" => (0x0000, 0x0000),
    "bloc" => (0x0000, 0x0000),
    "block" => (0x0000, 0x0000),
    "block;" => (0x2588, 0x0000),
    "bn" => (0x0000, 0x0000),
    "bne" => (0x0000, 0x0000),
    "bne;" => (0x003D, 0x20E5),
    "bneq" => (0x0000, 0x0000),
    "bnequ" => (0x0000, 0x0000),
    "bnequi" => (0x0000, 0x0000),
    "bnequiv" => (0x0000, 0x0000),
    "bnequiv;" => (0x2261, 0x20E5),
    "bno" => (0x0000, 0x0000),
    "bnot" => (0x0000, 0x0000),
    "bnot;" => (0x2310, 0x0000),
    "bo" => (0x0000, 0x0000),
    "bop" => (0x0000, 0x0000),
    "bopf" => (0x0000, 0x0000),
    "bopf;" => (0x1D553, 0x0000),
    "bot" => (0x0000, 0x0000),
    "bot;" => (0x22A5, 0x0000),
    "bott" => (0x0000, 0x0000),
    "botto" => (0x0000, 0x0000),
    "bottom" => (0x0000, 0x0000),
    "bottom;" => (0x22A5, 0x0000),
    "bow" => (0x0000, 0x0000),
    "bowt" => (0x0000, 0x0000),
    "bowti" => (0x0000, 0x0000),
    "bowtie" => (0x0000, 0x0000),
    "bowtie;" => (0x22C8, 0x0000),
    "box" => (0x0000, 0x0000),
    "boxD" => (0x0000, 0x0000),
    "boxDL" => (0x0000, 0x0000),
    "boxDL;" => (0x2557, 0x0000),
    "boxDR" => (0x0000, 0x0000),
    "boxDR;" => (0x2554, 0x0000),
    "boxDl" => (0x0000, 0x0000),
    "boxDl;" => (0x2556, 0x0000),
    "boxDr" => (0x0000, 0x0000),
    "boxDr;" => (0x2553, 0x0000),
    "boxH" => (0x0000, 0x0000),
    "boxH;" => (0x2550, 0x0000),
    "boxHD" => (0x0000, 0x0000),
    "boxHD;" => (0x2566, 0x0000),
    "boxHU" => (0x0000, 0x0000),
    "boxHU;" => (0x2569, 0x0000),
    "boxHd" => (0x0000, 0x0000),
    "boxHd;" => (0x2564, 0x0000),
    "boxHu" => (0x0000, 0x0000),
    "boxHu;" => (0x2567, 0x0000),
    "boxU" => (0x0000, 0x0000),
    "boxUL" => (0x0000, 0x0000),
    "boxUL;" => (0x255D, 0x0000),
    "boxUR" => (0x0000, 0x0000),
    "boxUR;" => (0x255A, 0x0000),
    "boxUl" => (0x0000, 0x0000),
    "boxUl;" => (0x255C, 0x0000),
    "boxUr" => (0x0000, 0x0000),
    "boxUr;" => (0x2559, 0x0000),
    "boxV" => (0x0000, 0x0000),
    "boxV;" => (0x2551, 0x0000),
    "boxVH" => (0x0000, 0x0000),
    "boxVH;" => (0x256C, 0x0000),
    "boxVL" => (0x0000, 0x0000),
    "boxVL;" => (0x2563, 0x0000),
    "boxVR" => (0x0000, 0x0000),
    "boxVR;" => (0x2560, 0x0000),
    "boxVh" => (0x0000, 0x0000),
    "boxVh;" => (0x256B, 0x0000),
    "boxVl" => (0x0000, 0x0000),
    "boxVl;" => (0x2562, 0x0000),
    "boxVr" => (0x0000, 0x0000),
    "boxVr;" => (0x255F, 0x0000),
    "boxb" => (0x0000, 0x0000),
    "boxbo" => (0x0000, 0x0000),
    "boxbox" => (0x0000, 0x0000),
    "boxbox;" => (0x29C9, 0x0000),
    "boxd" => (0x0000, 0x0000),
    "boxdL" => (0x0000, 0x0000),
    "boxdL;" => (0x2555, 0x0000),
    "boxdR" => (0x0000, 0x0000),
    "boxdR;" => (0x2552, 0x0000),
    "boxdl" => (0x0000, 0x0000),
    "boxdl;" => (0x2510, 0x0000),
    "boxdr" => (0x0000, 0x0000),
    "boxdr;" => (0x250C, 0x0000),
    "boxh" => (0x0000, 0x0000),
    "boxh;" => (0x2500, 0x0000),
    "boxhD" => (0x0000, 0x0000),
    "boxhD;" => (0x2565, 0x0000),
    "boxhU" => (0x0000, 0x0000),
    "boxhU;" => (0x2568, 0x0000),
    "boxhd" => (0x0000, 0x0000),
    "boxhd;" => (0x252C, 0x0000),
    "boxhu" => (0x0000, 0x0000),
    "boxhu;" => (0x2534, 0x0000),
    "boxm" => (0x0000, 0x0000),
    "boxmi" => (0x0000, 0x0000),
    "boxmin" => (0x0000, 0x0000),
    "boxminu" => (0x0000, 0x0000),
    "boxminus" => (0x0000, 0x0000),
    "boxminus;" => (0x229F, 0x0000),
    "boxp" => (0x0000, 0x0000),
    "boxpl" => (0x0000, 0x0000),
    "boxplu" => (0x0000, 0x0000),
    "boxplus" => (0x0000, 0x0000),
    "boxplus;" => (0x229E, 0x0000),
    "boxt" => (0x0000, 0x0000),
    "boxti" => (0x0000, 0x0000),
    "boxtim" => (0x0000, 0x0000),
    "boxtime" => (0x0000, 0x0000),
    "boxtimes" => (0x0000, 0x0000),
    "boxtimes;" => (0x22A0, 0x0000),
    "boxu" => (0x0000, 0x0000),
    "boxuL" => (0x0000, 0x0000),
    "boxuL;" => (0x255B, 0x0000),
    "boxuR" => (0x0000, 0x0000),
    "boxuR;" => (0x2558, 0x0000),
    "boxul" => (0x0000, 0x0000),
    "boxul;" => (0x2518, 0x0000),
    "boxur" => (0x0000, 0x0000),
    "boxur;" => (0x2514, 0x0000),
    "boxv" => (0x0000, 0x0000),
    "boxv;" => (0x2502, 0x0000),
    "boxvH" => (0x0000, 0x0000),
    "boxvH;" => (0x256A, 0x0000),
    "boxvL" => (0x0000, 0x0000),
    "boxvL;" => (0x2561, 0x0000),
    "boxvR" => (0x0000, 0x0000),
    "boxvR;" => (0x255E, 0x0000),
    "boxvh" => (0x0000, 0x0000),
    "boxvh;" => (0x253C, 0x0000),
    "boxvl" => (0x0000, 0x0000),
    "boxvl;" => (0x2524, 0x0000),
    "boxvr" => (0x0000, 0x0000),
    "boxvr;" => (0x251C, 0x0000),
    "bp" => (0x0000, 0x0000),
    "bpr" => (0x0000, 0x0000),
    "bpri" => (0x0000, 0x0000),
    "bprim" => (0x0000, 0x0000),
    "bprime" => (0x0000, 0x0000),
    "bprime;" => (0x2035, 0x0000),
    "br" => (0x0000, 0x0000),
    "bre" => (0x0000, 0x0000),
    "brev" => (0x0000, 0x0000),
    "breve" => (0x0000, 0x0000),
    "breve;" => (0x02D8, 0x0000),
    "brv" => (0x0000, 0x0000),
    "brvb" => (0x0000, 0x0000),
    "brvba" => (0x0000, 0x0000),
    "brvbar" => (0x00A6, 0x0000),
    "brvbar;" => (0x00A6, 0x0000),
    "bs" => (0x0000, 0x0000),
    "bsc" => (0x0000, 0x0000),
    "bscr" => (0x0000, 0x0000),
    "bscr;" => (0x1D4B7, 0x0000),
    "bse" => (0x0000, 0x0000),
    "bsem" => (0x0000, 0x0000),
    "bsemi" => (0x0000, 0x0000),
    "bsemi;" => (0x204F, 0x0000),
    "bsi" => (0x0000, 0x0000),
    "bsim" => (0x0000, 0x0000),
    "bsim;" => (0x223D, 0x0000),
    "bsime" => (0x0000, 0x0000),
    "bsime;" => (0x22CD, 0x0000),
    "bso" => (0x0000, 0x0000),
    "bsol" => (0x0000, 0x0000),
    "bsol;" => (0x005C, 0x0000),
    "bsolb" => (0x0000, 0x0000),
    "bsolb;" => (0x29C5, 0x0000),
    "bsolh" => (0x0000, 0x0000),
    "bsolhs" => (0x0000, 0x0000),
    "bsolhsu" => (0x0000, 0x0000),
    "bsolhsub" => (0x0000, 0x0000),
    "bsolhsub;" => (0x27C8, 0x0000),
    "bu" => (0x0000, 0x0000),
    "bul" => (0x0000, 0x0000),
    "bull" => (0x0000, 0x0000),
    "bull;" => (0x2022, 0x0000),
    "bulle" => (0x0000, 0x0000),
    "bullet" => (0x0000, 0x0000),
    "bullet;" => (0x2022, 0x0000),
    "bum" => (0x0000, 0x0000),
    "bump" => (0x0000, 0x0000),
    "bump;" => (0x224E, 0x0000),
    "bumpE" => (0x0000, 0x0000),
    "bumpE;" => (0x2AAE, 0x0000),
    "bumpe" => (0x0000, 0x0000),
    "bumpe;" => (0x224F, 0x0000),
    "bumpeq" => (0x0000, 0x0000),
    "bumpeq;" => (0x224F, 0x0000),
    "c" => (0x0000, 0x0000),
    "ca" => (0x0000, 0x0000),
    "cac" => (0x0000, 0x0000),
    "cacu" => (0x0000, 0x0000),
    "cacut" => (0x0000, 0x0000),
    "cacute" => (0x0000, 0x0000),
    "cacute;" => (0x0107, 0x0000),
    "cap" => (0x0000, 0x0000),
    "cap;" => (0x2229, 0x0000),
    "capa" => (0x0000, 0x0000),
    "capan" => (0x0000, 0x0000),
    "capand" => (0x0000, 0x0000),
    "capand;" => (0x2A44, 0x0000),
    "capb" => (0x0000, 0x0000),
    "capbr" => (0x0000, 0x0000),
    "capbrc" => (0x0000, 0x0000),
    "capbrcu" => (0x0000, 0x0000),
    "capbrcup" => (0x0000, 0x0000),
    "capbrcup;" => (0x2A49, 0x0000),
    "capc" => (0x0000, 0x0000),
    "capca" => (0x0000, 0x0000),
    "capcap" => (0x0000, 0x0000),
    "capcap;" => (0x2A4B, 0x0000),
    "capcu" => (0x0000, 0x0000),
    "capcup" => (0x0000, 0x0000),
    "capcup;" => (0x2A47, 0x0000),
    "capd" => (0x0000, 0x0000),
    "capdo" => (0x0000, 0x0000),
    "capdot" => (0x0000, 0x0000),
    "capdot;" => (0x2A40, 0x0000),
    "caps" => (0x0000, 0x0000),
    "caps;" => (0x2229, 0xFE00),
    "car" => (0x0000, 0x0000),
    "care" => (0x0000, 0x0000),
    "caret" => (0x0000, 0x0000),
    "caret;" => (0x2041, 0x0000),
    "caro" => (0x0000, 0x0000),
    "caron" => (0x0000, 0x0000),
    "caron;" => (0x02C7, 0x0000),
    "cc" => (0x0000, 0x0000),
    "cca" => (0x0000, 0x0000),
    "ccap" => (0x0000, 0x0000),
    "ccaps" => (0x0000, 0x0000),
    "ccaps;" => (0x2A4D, 0x0000),
    "ccar" => (0x0000, 0x0000),
    "ccaro" => (0x0000, 0x0000),
    "ccaron" => (0x0000, 0x0000),
    "ccaron;" => (0x010D, 0x0000),
    "cce" => (0x0000, 0x0000),
    "cced" => (0x0000, 0x0000),
    "ccedi" => (0x0000, 0x0000),
    "ccedil" => (0x00E7, 0x0000),
    "ccedil;" => (0x00E7, 0x0000),
    "cci" => (0x0000, 0x0000),
    "ccir" => (0x0000, 0x0000),
    "ccirc" => (0x0000, 0x0000),
    "ccirc;" => (0x0109, 0x0000),
    "ccu" => (0x0000, 0x0000),
    "ccup" => (0x0000, 0x0000),
    "ccups" => (0x0000, 0x0000),
    "ccups;" => (0x2A4C, 0x0000),
    "ccupss" => (0x0000, 0x0000),
    "ccupssm" => (0x0000, 0x0000),
    "ccupssm;" => (0x2A50, 0x0000),
    "cd" => (0x0000, 0x0000),
    "cdo" => (0x0000, 0x0000),
    "cdot" => (0x0000, 0x0000),
    "cdot;" => (0x010B, 0x0000),
    "ce" => (0x0000, 0x0000),
    "ced" => (0x0000, 0x0000),
    "cedi" => (0x0000, 0x0000),
    "cedil" => (0x00B8, 0x0000),
    "cedil;" => (0x00B8, 0x0000),
    "cem" => (0x0000, 0x0000),
    "cemp" => (0x0000, 0x0000),
    "cempt" => (0x0000, 0x0000),
    "cempty" => (0x0000, 0x0000),
    "cemptyv" => (0x0000, 0x0000),
    "cemptyv;" => (0x29B2, 0x0000),
    "cen" => (0x0000, 0x0000),
    "cent" => (0x00A2, 0x0000),
    "cent;" => (0x00A2, 0x0000),
    "cente" => (0x0000, 0x0000),
    "center" => (0x0000, 0x0000),
    "centerd" => (0x0000, 0x0000),
    "centerdo" => (0x0000, 0x0000),
    "centerdot" => (0x0000, 0x0000),
    "centerdot;" => (0x00B7, 0x0000),
    "cf" => (0x0000, 0x0000),
    "cfr" => (0x0000, 0x0000),
    "cfr;" => (0x1D520, 0x0000),
    "ch" => (0x0000, 0x0000),
    "chc" => (0x0000, 0x0000),
    "chcy" => (0x0000, 0x0000),
    "chcy;" => (0x0447, 0x0000),
    "che" => (0x0000, 0x0000),
    "chec" => (0x0000, 0x0000),
    "check" => (0x0000, 0x0000),
    "check;" => (0x2713, 0x0000),
    "checkm" => (0x0000, 0x0000),
    "checkma" => (0x0000, 0x0000),
    "checkmar" => (0x0000, 0x0000),
    "checkmark" => (0x0000, 0x0000),
    "checkmark;" => (0x2713, 0x0000),
    "chi" => (0x0000, 0x0000),
    "chi;" => (0x03C7, 0x0000),
    "ci" => (0x0000, 0x0000),
    "cir" => (0x0000, 0x0000),
    "cir;" => (0x25CB, 0x0000),
    "cirE" => (0x0000, 0x0000),
    "cirE;" => (0x29C3, 0x0000),
    "circ" => (0x0000, 0x0000),
    "circ;" => (0x02C6, 0x0000),
    "circe" => (0x0000, 0x0000),
    "circeq" => (0x0000, 0x0000),
    "circeq;" => (0x2257, 0x0000),
    "circl" => (0x0000, 0x0000),
    "circle" => (0x0000, 0x0000),
    "circlea" => (0x0000, 0x0000),
    "circlear" => (0x0000, 0x0000),
    "circlearr" => (0x0000, 0x0000),
    "circlearro" => (0x0000, 0x0000),
    "circlearrow" => (0x0000, 0x0000),
    "circlearrowl" => (0x0000, 0x0000),
    "circlearrowle" => (0x0000, 0x0000),
    "circlearrowlef" => (0x0000, 0x0000),
    "circlearrowleft" => (0x0000, 0x0000),
    "circlearrowleft;" => (0x21BA, 0x0000),
    "circlearrowr" => (0x0000, 0x0000),
    "circlearrowri" => (0x0000, 0x0000),
    "circlearrowrig" => (0x0000, 0x0000),
    "circlearrowrigh" => (0x0000, 0x0000),
    "circlearrowright" => (0x0000, 0x0000),
    "circlearrowright;" => (0x21BB, 0x0000),
    "circled" => (0x0000, 0x0000),
    "circledR" => (0x0000, 0x0000),
    "circledR;" => (0x00AE, 0x0000),
    "circledS" => (0x0000, 0x0000),
    "circledS;" => (0x24C8, 0x0000),
    "circleda" => (0x0000, 0x0000),
    "circledas" => (0x0000, 0x0000),
    "circledast" => (0x0000, 0x0000),
    "circledast;" => (0x229B, 0x0000),
    "circledc" => (0x0000, 0x0000),
    "circledci" => (0x0000, 0x0000),
    "circledcir" => (0x0000, 0x0000),
    "circledcirc" => (0x0000, 0x0000),
    "circledcirc;" => (0x229A, 0x0000),
    "circledd" => (0x0000, 0x0000),
    "circledda" => (0x0000, 0x0000),
    "circleddas" => (0x0000, 0x0000),
    "circleddash" => (0x0000, 0x0000),
    "circleddash;" => (0x229D, 0x0000),
    "cire" => (0x0000, 0x0000),
    "cire;" => (0x2257, 0x0000),
    "cirf" => (0x0000, 0x0000),
    "cirfn" => (0x0000, 0x0000),
    "cirfni" => (0x0000, 0x0000),
    "cirfnin" => (0x0000, 0x0000),
    "cirfnint" => (0x0000, 0x0000),
    "cirfnint;" => (0x2A10, 0x0000),
    "cirm" => (0x0000, 0x0000),
    "cirmi" => (0x0000, 0x0000),
    "cirmid" => (0x0000, 0x0000),
    "cirmid;" => (0x2AEF, 0x0000),
    "cirs" => (0x0000, 0x0000),
    "cirsc" => (0x0000, 0x0000),
    "cirsci" => (0x0000, 0x0000),
    "cirscir" => (0x0000, 0x0000),
    "cirscir;" => (0x29C2, 0x0000),
    "cl" => (0x0000, 0x0000),
    "clu" => (0x0000, 0x0000),
    "club" => (0x0000, 0x0000),
    "clubs" => (0x0000, 0x0000),
    "clubs;" => (0x2663, 0x0000),
    "clubsu" => (0x0000, 0x0000),
    "clubsui" => (0x0000, 0x0000),
    "clubsuit" => (0x0000, 0x0000),
    "clubsuit;" => (0x2663, 0x0000),
    "co" => (0x0000, 0x0000),
    "col" => (0x0000, 0x0000),
    "colo" => (0x0000, 0x0000),
    "colon" => (0x0000, 0x0000),
    "colon;" => (0x003A, 0x0000),
    "colone" => (0x0000, 0x0000),
    "colone;" => (0x2254, 0x0000),
    "coloneq" => (0x0000, 0x0000),
    "coloneq;" => (0x2254, 0x0000),
    "com" => (0x0000, 0x0000),
    "comm" => (0x0000, 0x0000),
    "comma" => (0x0000, 0x0000),
    "comma;" => (0x002C, 0x0000),
    "commat" => (0x0000, 0x0000),
    "commat;" => (0x0040, 0x0000),
    "comp" => (0x0000, 0x0000),
    "comp;" => (0x2201, 0x0000),
    "compf" => (0x0000, 0x0000),
    "compfn" => (0x0000, 0x0000),
    "compfn;" => (0x2218, 0x0000),
    "compl" => (0x0000, 0x0000),
    "comple" => (0x0000, 0x0000),
    "complem" => (0x0000, 0x0000),
    "compleme" => (0x0000, 0x0000),
    "complemen" => (0x0000, 0x0000),
    "complement" => (0x0000, 0x0000),
    "complement;" => (0x2201, 0x0000),
    "complex" => (0x0000, 0x0000),
    "complexe" => (0x0000, 0x0000),
    "complexes" => (0x0000, 0x0000),
    "complexes;" => (0x2102, 0x0000),
    "con" => (0x0000, 0x0000),
    "cong" => (0x0000, 0x0000),
    "cong;" => (0x2245, 0x0000),
    "congd" => (0x0000, 0x0000),
    "congdo" => (0x0000, 0x0000),
    "congdot" => (0x0000, 0x0000),
    "congdot;" => (0x2A6D, 0x0000),
    "coni" => (0x0000, 0x0000),
    "conin" => (0x0000, 0x0000),
    "conint" => (0x0000, 0x0000),
    "conint;" => (0x222E, 0x0000),
    "cop" => (0x0000, 0x0000),
    "copf" => (0x0000, 0x0000),
    "copf;" => (0x1D554, 0x0000),
    "copr" => (0x0000, 0x0000),
    "copro" => (0x0000, 0x0000),
    "coprod" => (0x0000, 0x0000),
    "coprod;" => (0x2210, 0x0000),
    "copy" => (0x00A9, 0x0000),
    "copy;" => (0x00A9, 0x0000),
    "copys" => (0x0000, 0x0000),
    "copysr" => (0x0000, 0x0000),
    "copysr;" => (0x2117, 0x0000),
    "cr" => (0x0000, 0x0000),
    "cra" => (0x0000, 0x0000),
    "crar" => (0x0000, 0x0000),
    "crarr" => (0x0000, 0x0000),
    "crarr;" => (0x21B5, 0x0000),
    "cro" => (0x0000, 0x0000),
    "cros" => (0x0000, 0x0000),
    "cross" => (0x0000, 0x0000),
    "cross;" => (0x2717, 0x0000),
    "cs" => (0x0000, 0x0000),
    "csc" => (0x0000, 0x0000),
    "cscr" => (0x0000, 0x0000),
    "cscr;" => (0x1D4B8, 0x0000),
    "csu" => (0x0000, 0x0000),
    "csub" => (0x0000, 0x0000),
    "csub;" => (0x2ACF, 0x0000),
    "csube" => (0x0000, 0x0000),
    "csube;" => (0x2AD1, 0x0000),
    "csup" => (0x0000, 0x0000),
    "csup;" => (0x2AD0, 0x0000),
    "csupe" => (0x0000, 0x0000),
    "csupe;" => (0x2AD2, 0x0000),
    "ct" => (0x0000, 0x0000),
    "ctd" => (0x0000, 0x0000),
    "ctdo" => (0x0000, 0x0000),
    "ctdot" => (0x0000, 0x0000),
    "ctdot;" => (0x22EF, 0x0000),
    "cu" => (0x0000, 0x0000),
    "cud" => (0x0000, 0x0000),
    "cuda" => (0x0000, 0x0000),
    "cudar" => (0x0000, 0x0000),
    "cudarr" => (0x0000, 0x0000),
    "cudarrl" => (0x0000, 0x0000),
    "cudarrl;" => (0x2938, 0x0000),
    "cudarrr" => (0x0000, 0x0000),
    "cudarrr;" => (0x2935, 0x0000),
    "cue" => (0x0000, 0x0000),
    "cuep" => (0x0000, 0x0000),
    "cuepr" => (0x0000, 0x0000),
    "cuepr;" => (0x22DE, 0x0000),
    "cues" => (0x0000, 0x0000),
    "cuesc" => (0x0000, 0x0000),
    "cuesc;" => (0x22DF, 0x0000),
    "cul" => (0x0000, 0x0000),
    "cula" => (0x0000, 0x0000),
    "cular" => (0x0000, 0x0000),
    "cularr" => (0x0000, 0x0000),
    "cularr;" => (0x21B6, 0x0000),
    "cularrp" => (0x0000, 0x0000),
    "cularrp;" => (0x293D, 0x0000),
    "cup" => (0x0000, 0x0000),
    "cup;" => (0x222A, 0x0000),
    "cupb" => (0x0000, 0x0000),
    "cupbr" => (0x0000, 0x0000),
    "cupbrc" => (0x0000, 0x0000),
    "cupbrca" => (0x0000, 0x0000),
    "cupbrcap" => (0x0000, 0x0000),
    "cupbrcap;" => (0x2A48, 0x0000),
    "cupc" => (0x0000, 0x0000),
    "cupca" => (0x0000, 0x0000),
    "cupcap" => (0x0000, 0x0000),
    "cupcap;" => (0x2A46, 0x0000),
    "cupcu" => (0x0000, 0x0000),
    "cupcup" => (0x0000, 0x0000),
    "cupcup;" => (0x2A4A, 0x0000),
    "cupd" => (0x0000, 0x0000),
    "cupdo" => (0x0000, 0x0000),
    "cupdot" => (0x0000, 0x0000),
    "cupdot;" => (0x228D, 0x0000),
    "cupo" => (0x0000, 0x0000),
    "cupor" => (0x0000, 0x0000),
    "cupor;" => (0x2A45, 0x0000),
    "cups" => (0x0000, 0x0000),
    "cups;" => (0x222A, 0xFE00),
    "cur" => (0x0000, 0x0000),
    "cura" => (0x0000, 0x0000),
    "curar" => (0x0000, 0x0000),
    "curarr" => (0x0000, 0x0000),
    "curarr;" => (0x21B7, 0x0000),
    "curarrm" => (0x0000, 0x0000),
    "curarrm;" => (0x293C, 0x0000),
    "curl" => (0x0000, 0x0000),
    "curly" => (0x0000, 0x0000),
    "curlye" => (0x0000, 0x0000),
    "curlyeq" => (0x0000, 0x0000),
    "curlyeqp" => (0x0000, 0x0000),
    "curlyeqpr" => (0x0000, 0x0000),
    "curlyeqpre" => (0x0000, 0x0000),
    "curlyeqprec" => (0x0000, 0x0000),
    "curlyeqprec;" => (0x22DE, 0x0000),
    "curlyeqs" => (0x0000, 0x0000),
    "curlyeqsu" => (0x0000, 0x0000),
    "curlyeqsuc" => (0x0000, 0x0000),
    "curlyeqsucc" => (0x0000, 0x0000),
    "curlyeqsucc;" => (0x22DF, 0x0000),
    "curlyv" => (0x0000, 0x0000),
    "curlyve" => (0x0000, 0x0000),
    "curlyvee" => (0x0000, 0x0000),
    "curlyvee;" => (0x22CE, 0x0000),
    "curlyw" => (0x0000, 0x0000),
    "curlywe" => (0x0000, 0x0000),
    "curlywed" => (0x0000, 0x0000),
    "curlywedg" => (0x0000, 0x0000),
    "curlywedge" => (0x0000, 0x0000),
    "curlywedge;" => (0x22CF, 0x0000),
    "curr" => (0x0000, 0x0000),
    "curre" => (0x0000, 0x0000),
    "curren" => (0x00A4, 0x0000),
    "curren;" => (0x00A4, 0x0000),
    "curv" => (0x0000, 0x0000),
    "curve" => (0x0000, 0x0000),
    "curvea" => (0x0000, 0x0000),
    "curvear" => (0x0000, 0x0000),
    "curvearr" => (0x0000, 0x0000),
    "curvearro" => (0x0000, 0x0000),
    "curvearrow" => (0x0000, 0x0000),
    "curvearrowl" => (0x0000, 0x0000),
    "curvearrowle" => (0x0000, 0x0000),
    "curvearrowlef" => (0x0000, 0x0000),
    "curvearrowleft" => (0x0000, 0x0000),
    "curvearrowleft;" => (0x21B6, 0x0000),
    "curvearrowr" => (0x0000, 0x0000),
    "curvearrowri" => (0x0000, 0x0000),
    "curvearrowrig" => (0x0000, 0x0000),
    "curvearrowrigh" => (0x0000, 0x0000),
    "curvearrowright" => (0x0000, 0x0000),
    "curvearrowright;" => (0x21B7, 0x0000),
    "cuv" => (0x0000, 0x0000),
    "cuve" => (0x0000, 0x0000),
    "cuvee" => (0x0000, 0x0000),
    "cuvee;" => (0x22CE, 0x0000),
    "cuw" => (0x0000, 0x0000),
    "cuwe" => (0x0000, 0x0000),
    "cuwed" => (0x0000, 0x0000),
    "cuwed;" => (0x22CF, 0x0000),
    "cw" => (0x0000, 0x0000),
    "cwc" => (0x0000, 0x0000),
    "cwco" => (0x0000, 0x0000),
    "cwcon" => (0x0000, 0x0000),
    "cwconi" => (0x0000, 0x0000),
    "cwconin" => (0x0000, 0x0000),
    "cwconint" => (0x0000, 0x0000),
    "cwconint;" => (0x2232, 0x0000),
    "cwi" => (0x0000, 0x0000),
    "cwin" => (0x0000, 0x0000),
    "cwint" => (0x0000, 0x0000),
    "cwint;" => (0x2231, 0x0000),
    "cy" => (0x0000, 0x0000),
    "cyl" => (0x0000, 0x0000),
    "cylc" => (0x0000, 0x0000),
    "cylct" => (0x0000, 0x0000),
    "cylcty" => (0x0000, 0x0000),
    "cylcty;" => (0x232D, 0x0000),
    "d" => (0x0000, 0x0000),
    "dA" => (0x0000, 0x0000),
    "dAr" => (0x0000, 0x0000),
    "dArr" => (0x0000, 0x0000),
    "dArr;" => (0x21D3, 0x0000),
    "dH" => (0x0000, 0x0000),
    "dHa" => (0x0000, 0x0000),
    "dHar" => (0x0000, 0x0000),
    "dHar;" => (0x2965, 0x0000),
    "da" => (0x0000, 0x0000),
    "dag" => (0x0000, 0x0000),
    "dagg" => (0x0000, 0x0000),
    "dagge" => (0x0000, 0x0000),
    "dagger" => (0x0000, 0x0000),
    "dagger;" => (0x2020, 0x0000),
    "dal" => (0x0000, 0x0000),
    "dale" => (0x0000, 0x0000),
    "dalet" => (0x0000, 0x0000),
    "daleth" => (0x0000, 0x0000),
    "daleth;" => (0x2138, 0x0000),
    "dar" => (0x0000, 0x0000),
    "darr" => (0x0000, 0x0000),
    "darr;" => (0x2193, 0x0000),
    "das" => (0x0000, 0x0000),
    "dash" => (0x0000, 0x0000),
    "dash;" => (0x2010, 0x0000),
    "dashv" => (0x0000, 0x0000),
    "dashv;" => (0x22A3, 0x0000),
    "db" => (0x0000, 0x0000),
    "dbk" => (0x0000, 0x0000),
    "dbka" => (0x0000, 0x0000),
    "dbkar" => (0x0000, 0x0000),
    "dbkaro" => (0x0000, 0x0000),
    "dbkarow" => (0x0000, 0x0000),
    "dbkarow;" => (0x290F, 0x0000),
    "dbl" => (0x0000, 0x0000),
    "dbla" => (0x0000, 0x0000),
    "dblac" => (0x0000, 0x0000),
    "dblac;" => (0x02DD, 0x0000),
    "dc" => (0x0000, 0x0000),
    "dca" => (0x0000, 0x0000),
    "dcar" => (0x0000, 0x0000),
    "dcaro" => (0x0000, 0x0000),
    "dcaron" => (0x0000, 0x0000),
    "dcaron;" => (0x010F, 0x0000),
    "dcy" => (0x0000, 0x0000),
    "dcy;" => (0x0434, 0x0000),
    "dd" => (0x0000, 0x0000),
    "dd;" => (0x2146, 0x0000),
    "dda" => (0x0000, 0x0000),
    "ddag" => (0x0000, 0x0000),
    "ddagg" => (0x0000, 0x0000),
    "ddagge" => (0x0000, 0x0000),
    "ddagger" => (0x0000, 0x0000),
    "ddagger;" => (0x2021, 0x0000),
    "ddar" => (0x0000, 0x0000),
    "ddarr" => (0x0000, 0x0000),
    "ddarr;" => (0x21CA, 0x0000),
    "ddo" => (0x0000, 0x0000),
    "ddot" => (0x0000, 0x0000),
    "ddots" => (0x0000, 0x0000),
    "ddotse" => (0x0000, 0x0000),
    "ddotseq" => (0x0000, 0x0000),
    "ddotseq;" => (0x2A77, 0x0000),
    "de" => (0x0000, 0x0000),
    "deg" => (0x00B0, 0x0000),
    "deg;" => (0x00B0, 0x0000),
    "del" => (0x0000, 0x0000),
    "delt" => (0x0000, 0x0000),
    "delta" => (0x0000, 0x0000),
    "delta;" => (0x03B4, 0x0000),
    "dem" => (0x0000, 0x0000),
    "demp" => (0x0000, 0x0000),
    "dempt" => (0x0000, 0x0000),
    "dempty" => (0x0000, 0x0000),
    "demptyv" => (0x0000, 0x0000),
    "demptyv;" => (0x29B1, 0x0000),
    "df" => (0x0000, 0x0000),
    "dfi" => (0x0000, 0x0000),
    "dfis" => (0x0000, 0x0000),
    "dfish" => (0x0000, 0x0000),
    "dfisht" => (0x0000, 0x0000),
    "dfisht;" => (0x297F, 0x0000),
    "dfr" => (0x0000, 0x0000),
    "dfr;" => (0x1D521, 0x0000),
    "dh" => (0x0000, 0x0000),
    "dha" => (0x0000, 0x0000),
    "dhar" => (0x0000, 0x0000),
    "dharl" => (0x0000, 0x0000),
    "dharl;" => (0x21C3, 0x0000),
    "dharr" => (0x0000, 0x0000),
    "dharr;" => (0x21C2, 0x0000),
    "di" => (0x0000, 0x0000),
    "dia" => (0x0000, 0x0000),
    "diam" => (0x0000, 0x0000),
    "diam;" => (0x22C4, 0x0000),
    "diamo" => (0x0000, 0x0000),
    "diamon" => (0x0000, 0x0000),
    "diamond" => (0x0000, 0x0000),
    "diamond;" => (0x22C4, 0x0000),
    "diamonds" => (0x0000, 0x0000),
    "diamondsu" => (0x0000, 0x0000),
    "diamondsui" => (0x0000, 0x0000),
    "diamondsuit" => (0x0000, 0x0000),
    "diamondsuit;" => (0x2666, 0x0000),
    "diams" => (0x0000, 0x0000),
    "diams;" => (0x2666, 0x0000),
    "die" => (0x0000, 0x0000),
    "die;" => (0x00A8, 0x0000),
    "dig" => (0x0000, 0x0000),
    "diga" => (0x0000, 0x0000),
    "digam" => (0x0000, 0x0000),
    "digamm" => (0x0000, 0x0000),
    "digamma" => (0x0000, 0x0000),
    "digamma;" => (0x03DD, 0x0000),
    "dis" => (0x0000, 0x0000),
    "disi" => (0x0000, 0x0000),
    "disin" => (0x0000, 0x0000),
    "disin;" => (0x22F2, 0x0000),
    "div" => (0x0000, 0x0000),
    "div;" => (0x00F7, 0x0000),
    "divi" => (0x0000, 0x0000),
    "divid" => (0x0000, 0x0000),
    "divide" => (0x00F7, 0x0000),
    "divide;" => (0x00F7, 0x0000),
    "divideo" => (0x0000, 0x0000),
    "divideon" => (0x0000, 0x0000),
    "divideont" => (0x0000, 0x0000),
    "divideonti" => (0x0000, 0x0000),
    "divideontim" => (0x0000, 0x0000),
    "divideontime" => (0x0000, 0x0000),
    "divideontimes" => (0x0000, 0x0000),
    "divideontimes;" => (0x22C7, 0x0000),
    "divo" => (0x0000, 0x0000),
    "divon" => (0x0000, 0x0000),
    "divonx" => (0x0000, 0x0000),
    "divonx;" => (0x22C7, 0x0000),
    "dj" => (0x0000, 0x0000),
    "djc" => (0x0000, 0x0000),
    "djcy" => (0x0000, 0x0000),
    "djcy;" => (0x0452, 0x0000),
    "dl" => (0x0000, 0x0000),
    "dlc" => (0x0000, 0x0000),
    "dlco" => (0x0000, 0x0000),
    "dlcor" => (0x0000, 0x0000),
    "dlcorn" => (0x0000, 0x0000),
    "dlcorn;" => (0x231E, 0x0000),
    "dlcr" => (0x0000, 0x0000),
    "dlcro" => (0x0000, 0x0000),
    "dlcrop" => (0x0000, 0x0000),
    "dlcrop;" => (0x230D, 0x0000),
    "do" => (0x0000, 0x0000),
    "dol" => (0x0000, 0x0000),
    "doll" => (0x0000, 0x0000),
    "dolla" => (0x0000, 0x0000),
    "dollar" => (0x0000, 0x0000),
    "dollar;" => (0x0024, 0x0000),
    "dop" => (0x0000, 0x0000),
    "dopf" => (0x0000, 0x0000),
    "dopf;" => (0x1D555, 0x0000),
    "dot" => (0x0000, 0x0000),
    "dot;" => (0x02D9, 0x0000),
    "dote" => (0x0000, 0x0000),
    "doteq" => (0x0000, 0x0000),
    "doteq;" => (0x2250, 0x0000),
    "doteqd" => (0x0000, 0x0000),
    "doteqdo" => (0x0000, 0x0000),
    "doteqdot" => (0x0000, 0x0000),
    "doteqdot;" => (0x2251, 0x0000),
    "dotm" => (0x0000, 0x0000),
    "dotmi" => (0x0000, 0x0000),
    "dotmin" => (0x0000, 0x0000),
    "dotminu" => (0x0000, 0x0000),
    "dotminus" => (0x0000, 0x0000),
    "dotminus;" => (0x2238, 0x0000),
    "dotp" => (0x0000, 0x0000),
    "dotpl" => (0x0000, 0x0000),
    "dotplu" => (0x0000, 0x0000),
    "dotplus" => (0x0000, 0x0000),
    "dotplus;" => (0x2214, 0x0000),
    "dots" => (0x0000, 0x0000),
    "dotsq" => (0x0000, 0x0000),
    "dotsqu" => (0x0000, 0x0000),
    "dotsqua" => (0x0000, 0x0000),
    "dotsquar" => (0x0000, 0x0000),
    "dotsquare" => (0x0000, 0x0000),
    "dotsquare;" => (0x22A1, 0x0000),
    "dou" => (0x0000, 0x0000),
    "doub" => (0x0000, 0x0000),
    "doubl" => (0x0000, 0x0000),
    "double" => (0x0000, 0x0000),
    "doubleb" => (0x0000, 0x0000),
    "doubleba" => (0x0000, 0x0000),
    "doublebar" => (0x0000, 0x0000),
    "doublebarw" => (0x0000, 0x0000),
    "doublebarwe" => (0x0000, 0x0000),
    "doublebarwed" => (0x0000, 0x0000),
    "doublebarwedg" => (0x0000, 0x0000),
    "doublebarwedge" => (0x0000, 0x0000),
    "doublebarwedge;" => (0x2306, 0x0000),
    "dow" => (0x0000, 0x0000),
    "down" => (0x0000, 0x0000),
    "downa" => (0x0000, 0x0000),
    "downar" => (0x0000, 0x0000),
    "downarr" => (0x0000, 0x0000),
    "downarro" => (0x0000, 0x0000),
    "downarrow" => (0x0000, 0x0000),
    "downarrow;" => (0x2193, 0x0000),
    "downd" => (0x0000, 0x0000),
    "downdo" => (0x0000, 0x0000),
    "downdow" => (0x0000, 0x0000),
    "downdown" => (0x0000, 0x0000),
    "downdowna" => (0x0000, 0x0000),
    "downdownar" => (0x0000, 0x0000),
    "downdownarr" => (0x0000, 0x0000),
    "downdownarro" => (0x0000, 0x0000),
    "downdownarrow" => (0x0000, 0x0000),
    "downdownarrows" => (0x0000, 0x0000),
    "downdownarrows;" => (0x21CA, 0x0000),
    "downh" => (0x0000, 0x0000),
    "downha" => (0x0000, 0x0000),
    "downhar" => (0x0000, 0x0000),
    "downharp" => (0x0000, 0x0000),
    "downharpo" => (0x0000, 0x0000),
    "downharpoo" => (0x0000, 0x0000),
    "downharpoon" => (0x0000, 0x0000),
    "downharpoonl" => (0x0000, 0x0000),
    "downharpoonle" => (0x0000, 0x0000),
    "downharpoonlef" => (0x0000, 0x0000),
    "downharpoonleft" => (0x0000, 0x0000),
    "downharpoonleft;" => (0x21C3, 0x0000),
    "downharpoonr" => (0x0000, 0x0000),
    "downharpoonri" => (0x0000, 0x0000),
    "downharpoonrig" => (0x0000, 0x0000),
    "downharpoonrigh" => (0x0000, 0x0000),
    "downharpoonright" => (0x0000, 0x0000),
    "downharpoonright;" => (0x21C2, 0x0000),
    "dr" => (0x0000, 0x0000),
    "drb" => (0x0000, 0x0000),
    "drbk" => (0x0000, 0x0000),
    "drbka" => (0x0000, 0x0000),
    "drbkar" => (0x0000, 0x0000),
    "drbkaro" => (0x0000, 0x0000),
    "drbkarow" => (0x0000, 0x0000),
    "drbkarow;" => (0x2910, 0x0000),
    "drc" => (0x0000, 0x0000),
    "drco" => (0x0000, 0x0000),
    "drcor" => (0x0000, 0x0000),
    "drcorn" => (0x0000, 0x0000),
    "drcorn;" => (0x231F, 0x0000),
    "drcr" => (0x0000, 0x0000),
    "drcro" => (0x0000, 0x0000),
    "drcrop" => (0x0000, 0x0000),
    "drcrop;" => (0x230C, 0x0000),
    "ds" => (0x0000, 0x0000),
    "dsc" => (0x0000, 0x0000),
    "dscr" => (0x0000, 0x0000),
    "dscr;" => (0x1D4B9, 0x0000),
    "dscy" => (0x0000, 0x0000),
    "dscy;" => (0x0455, 0x0000),
    "dso" => (0x0000, 0x0000),
    "dsol" => (0x0000, 0x0000),
    "dsol;" => (0x29F6, 0x0000),
    "dst" => (0x0000, 0x0000),
    "dstr" => (0x0000, 0x0000),
    "dstro" => (0x0000, 0x0000),
    "dstrok" => (0x0000, 0x0000),
    "dstrok;" => (0x0111, 0x0000),
    "dt" => (0x0000, 0x0000),
    "dtd" => (0x0000, 0x0000),
    "dtdo" => (0x0000, 0x0000),
    "dtdot" => (0x0000, 0x0000),
    "dtdot;" => (0x22F1, 0x0000),
    "dtr" => (0x0000, 0x0000),
    "dtri" => (0x0000, 0x0000),
    "dtri;" => (0x25BF, 0x0000),
    "dtrif" => (0x0000, 0x0000),
    "dtrif;" => (0x25BE, 0x0000),
    "du" => (0x0000, 0x0000),
    "dua" => (0x0000, 0x0000),
    "duar" => (0x0000, 0x0000),
    "duarr" => (0x0000, 0x0000),
    "duarr;" => (0x21F5, 0x0000),
    "duh" => (0x0000, 0x0000),
    "duha" => (0x0000, 0x0000),
    "duhar" => (0x0000, 0x0000),
    "duhar;" => (0x296F, 0x0000),
    "dw" => (0x0000, 0x0000),
    "dwa" => (0x0000, 0x0000),
    "dwan" => (0x0000, 0x0000),
    "dwang" => (0x0000, 0x0000),
    "dwangl" => (0x0000, 0x0000),
    "dwangle" => (0x0000, 0x0000),
    "dwangle;" => (0x29A6, 0x0000),
    "dz" => (0x0000, 0x0000),
    "dzc" => (0x0000, 0x0000),
    "dzcy" => (0x0000, 0x0000),
    "dzcy;" => (0x045F, 0x0000),
    "dzi" => (0x0000, 0x0000),
    "dzig" => (0x0000, 0x0000),
    "dzigr" => (0x0000, 0x0000),
    "dzigra" => (0x0000, 0x0000),
    "dzigrar" => (0x0000, 0x0000),
    "dzigrarr" => (0x0000, 0x0000),
    "dzigrarr;" => (0x27FF, 0x0000),
    "e" => (0x0000, 0x0000),
    "eD" => (0x0000, 0x0000),
    "eDD" => (0x0000, 0x0000),
    "eDDo" => (0x0000, 0x0000),
    "eDDot" => (0x0000, 0x0000),
    "eDDot;" => (0x2A77, 0x0000),
    "eDo" => (0x0000, 0x0000),
    "eDot" => (0x0000, 0x0000),
    "eDot;" => (0x2251, 0x0000),
    "ea" => (0x0000, 0x0000),
    "eac" => (0x0000, 0x0000),
    "eacu" => (0x0000, 0x0000),
    "eacut" => (0x0000, 0x0000),
    "eacute" => (0x00E9, 0x0000),
    "eacute;" => (0x00E9, 0x0000),
    "eas" => (0x0000, 0x0000),
    "east" => (0x0000, 0x0000),
    "easte" => (0x0000, 0x0000),
    "easter" => (0x0000, 0x0000),
    "easter;" => (0x2A6E, 0x0000),
    "ec" => (0x0000, 0x0000),
    "eca" => (0x0000, 0x0000),
    "ecar" => (0x0000, 0x0000),
    "ecaro" => (0x0000, 0x0000),
    "ecaron" => (0x0000, 0x0000),
    "ecaron;" => (0x011B, 0x0000),
    "eci" => (0x0000, 0x0000),
    "ecir" => (0x0000, 0x0000),
    "ecir;" => (0x2256, 0x0000),
    "ecirc" => (0x00EA, 0x0000),
    "ecirc;" => (0x00EA, 0x0000),
    "eco" => (0x0000, 0x0000),
    "ecol" => (0x0000, 0x0000),
    "ecolo" => (0x0000, 0x0000),
    "ecolon" => (0x0000, 0x0000),
    "ecolon;" => (0x2255, 0x0000),
    "ecy" => (0x0000, 0x0000),
    "ecy;" => (0x044D, 0x0000),
    "ed" => (0x0000, 0x0000),
    "edo" => (0x0000, 0x0000),
    "edot" => (0x0000, 0x0000),
    "edot;" => (0x0117, 0x0000),
    "ee" => (0x0000, 0x0000),
    "ee;" => (0x2147, 0x0000),
    "ef" => (0x0000, 0x0000),
    "efD" => (0x0000, 0x0000),
    "efDo" => (0x0000, 0x0000),
    "efDot" => (0x0000, 0x0000),
    "efDot;" => (0x2252, 0x0000),
    "efr" => (0x0000, 0x0000),
    "efr;" => (0x1D522, 0x0000),
    "eg" => (0x0000, 0x0000),
    "eg;" => (0x2A9A, 0x0000),
    "egr" => (0x0000, 0x0000),
    "egra" => (0x0000, 0x0000),
    "egrav" => (0x0000, 0x0000),
    "egrave" => (0x00E8, 0x0000),
    "egrave;" => (0x00E8, 0x0000),
    "egs" => (0x0000, 0x0000),
    "egs;" => (0x2A96, 0x0000),
    "egsd" => (0x0000, 0x0000),
    "egsdo" => (0x0000, 0x0000),
    "egsdot" => (0x0000, 0x0000),
    "egsdot;" => (0x2A98, 0x0000),
    "el" => (0x0000, 0x0000),
    "el;" => (0x2A99, 0x0000),
    "eli" => (0x0000, 0x0000),
    "elin" => (0x0000, 0x0000),
    "elint" => (0x0000, 0x0000),
    "elinte" => (0x0000, 0x0000),
    "elinter" => (0x0000, 0x0000),
    "elinters" => (0x0000, 0x0000),
    "elinters;" => (0x23E7, 0x0000),
    "ell" => (0x0000, 0x0000),
    "ell;" => (0x2113, 0x0000),
    "els" => (0x0000, 0x0000),
    "els;" => (0x2A95, 0x0000),
    "elsd" => (0x0000, 0x0000),
    "elsdo" => (0x0000, 0x0000),
    "elsdot" => (0x0000, 0x0000),
    "elsdot;" => (0x2A97, 0x0000),
    "em" => (0x0000, 0x0000),
    "ema" => (0x0000, 0x0000),
    "emac" => (0x0000, 0x0000),
    "emacr" => (0x0000, 0x0000),
    "emacr;" => (0x0113, 0x0000),
    "emp" => (0x0000, 0x0000),
    "empt" => (0x0000, 0x0000),
    "empty" => (0x0000, 0x0000),
    "empty;" => (0x2205, 0x0000),
    "emptys" => (0x0000, 0x0000),
    "emptyse" => (0x0000, 0x0000),
    "emptyset" => (0x0000, 0x0000),
    "emptyset;" => (0x2205, 0x0000),
    "emptyv" => (0x0000, 0x0000),
    "emptyv;" => (0x2205, 0x0000),
    "ems" => (0x0000, 0x0000),
    "emsp" => (0x0000, 0x0000),
    "emsp1" => (0x0000, 0x0000),
    "emsp13" => (0x0000, 0x0000),
    "emsp13;" => (0x2004, 0x0000),
    "emsp14" => (0x0000, 0x0000),
    "emsp14;" => (0x2005, 0x0000),
    "emsp;" => (0x2003, 0x0000),
    "en" => (0x0000, 0x0000),
    "eng" => (0x0000, 0x0000),
    "eng;" => (0x014B, 0x0000),
    "ens" => (0x0000, 0x0000),
    "ensp" => (0x0000, 0x0000),
    "ensp;" => (0x2002, 0x0000),
    "eo" => (0x0000, 0x0000),
    "eog" => (0x0000, 0x0000),
    "eogo" => (0x0000, 0x0000),
    "eogon" => (0x0000, 0x0000),
    "eogon;" => (0x0119, 0x0000),
    "eop" => (0x0000, 0x0000),
    "eopf" => (0x0000, 0x0000),
    "eopf;" => (0x1D556, 0x0000),
    "ep" => (0x0000, 0x0000),
    "epa" => (0x0000, 0x0000),
    "epar" => (0x0000, 0x0000),
    "epar;" => (0x22D5, 0x0000),
    "epars" => (0x0000, 0x0000),
    "eparsl" => (0x0000, 0x0000),
    "eparsl;" => (0x29E3, 0x0000),
    "epl" => (0x0000, 0x0000),
    "eplu" => (0x0000, 0x0000),
    "eplus" => (0x0000, 0x0000),
    "eplus;" => (0x2A71, 0x0000),
    "eps" => (0x0000, 0x0000),
    "epsi" => (0x0000, 0x0000),
    "epsi;" => (0x03B5, 0x0000),
    "epsil" => (0x0000, 0x0000),
    "epsilo" => (0x0000, 0x0000),
    "epsilon" => (0x0000, 0x0000),
    "epsilon;" => (0x03B5, 0x0000),
    "epsiv" => (0x0000, 0x0000),
    "epsiv;" => (0x03F5, 0x0000),
    "eq" => (0x0000, 0x0000),
    "eqc" => (0x0000, 0x0000),
    "eqci" => (0x0000, 0x0000),
    "eqcir" => (0x0000, 0x0000),
    "eqcirc" => (0x0000, 0x0000),
    "eqcirc;" => (0x2256, 0x0000),
    "eqco" => (0x0000, 0x0000),
    "eqcol" => (0x0000, 0x0000),
    "eqcolo" => (0x0000, 0x0000),
    "eqcolon" => (0x0000, 0x0000),
    "eqcolon;" => (0x2255, 0x0000),
    "eqs" => (0x0000, 0x0000),
    "eqsi" => (0x0000, 0x0000),
    "eqsim" => (0x0000, 0x0000),
    "eqsim;" => (0x2242, 0x0000),
    "eqsl" => (0x0000, 0x0000),
    "eqsla" => (0x0000, 0x0000),
    "eqslan" => (0x0000, 0x0000),
    "eqslant" => (0x0000, 0x0000),
    "eqslantg" => (0x0000, 0x0000),
    "eqslantgt" => (0x0000, 0x0000),
    "eqslantgtr" => (0x0000, 0x0000),
    "eqslantgtr;" => (0x2A96, 0x0000),
    "eqslantl" => (0x0000, 0x0000),
    "eqslantle" => (0x0000, 0x0000),
    "eqslantles" => (0x0000, 0x0000),
    "eqslantless" => (0x0000, 0x0000),
    "eqslantless;" => (0x2A95, 0x0000),
    "equ" => (0x0000, 0x0000),
    "equa" => (0x0000, 0x0000),
    "equal" => (0x0000, 0x0000),
    "equals" => (0x0000, 0x0000),
    "equals;" => (0x003D, 0x0000),
    "eque" => (0x0000, 0x0000),
    "eques" => (0x0000, 0x0000),
    "equest" => (0x0000, 0x0000),
    "equest;" => (0x225F, 0x0000),
    "equi" => (0x0000, 0x0000),
    "equiv" => (0x0000, 0x0000),
    "equiv;" => (0x2261, 0x0000),
    "equivD" => (0x0000, 0x0000),
    "equivDD" => (0x0000, 0x0000),
    "equivDD;" => (0x2A78, 0x0000),
    "eqv" => (0x0000, 0x0000),
    "eqvp" => (0x0000, 0x0000),
    "eqvpa" => (0x0000, 0x0000),
    "eqvpar" => (0x0000, 0x0000),
    "eqvpars" => (0x0000, 0x0000),
    "eqvparsl" => (0x0000, 0x0000),
    "eqvparsl;" => (0x29E5, 0x0000),
    "er" => (0x0000, 0x0000),
    "erD" => (0x0000, 0x0000),
    "erDo" => (0x0000, 0x0000),
    "erDot" => (0x0000, 0x0000),
    "erDot;" => (0x2253, 0x0000),
    "era" => (0x0000, 0x0000),
    "erar" => (0x0000, 0x0000),
    "erarr" => (0x0000, 0x0000),
    "erarr;" => (0x2971, 0x0000),
    "es" => (0x0000, 0x0000),
    "esc" => (0x0000, 0x0000),
    "escr" => (0x0000, 0x0000),
    "escr;" => (0x212F, 0x0000),
    "esd" => (0x0000, 0x0000),
    "esdo" => (0x0000, 0x0000),
    "esdot" => (0x0000, 0x0000),
    "esdot;" => (0x2250, 0x0000),
    "esi" => (0x0000, 0x0000),
    "esim" => (0x0000, 0x0000),
    "esim;" => (0x2242, 0x0000),
    "et" => (0x0000, 0x0000),
    "eta" => (0x0000, 0x0000),
    "eta;" => (0x03B7, 0x0000),
    "eth" => (0x00F0, 0x0000),
    "eth;" => (0x00F0, 0x0000),
    "eu" => (0x0000, 0x0000),
    "eum" => (0x0000, 0x0000),
    "euml" => (0x00EB, 0x0000),
    "euml;" => (0x00EB, 0x0000),
    "eur" => (0x0000, 0x0000),
    "euro" => (0x0000, 0x0000),
    "euro;" => (0x20AC, 0x0000),
    "ex" => (0x0000, 0x0000),
    "exc" => (0x0000, 0x0000),
    "excl" => (0x0000, 0x0000),
    "excl;" => (0x0021, 0x0000),
    "exi" => (0x0000, 0x0000),
    "exis" => (0x0000, 0x0000),
    "exist" => (0x0000, 0x0000),
    "exist;" => (0x2203, 0x0000),
    "exp" => (0x0000, 0x0000),
    "expe" => (0x0000, 0x0000),
    "expec" => (0x0000, 0x0000),
    "expect" => (0x0000, 0x0000),
    "expecta" => (0x0000, 0x0000),
    "expectat" => (0x0000, 0x0000),
    "expectati" => (0x0000, 0x0000),
    "expectatio" => (0x0000, 0x0000),
    "expectation" => (0x0000, 0x0000),
    "expectation;" => (0x2130, 0x0000),
    "expo" => (0x0000, 0x0000),
    "expon" => (0x0000, 0x0000),
    "expone" => (0x0000, 0x0000),
    "exponen" => (0x0000, 0x0000),
    "exponent" => (0x0000, 0x0000),
    "exponenti" => (0x0000, 0x0000),
    "exponentia" => (0x0000, 0x0000),
    "exponential" => (0x0000, 0x0000),
    "exponentiale" => (0x0000, 0x0000),
    "exponentiale;" => (0x2147, 0x0000),
    "f" => (0x0000, 0x0000),
    "fa" => (0x0000, 0x0000),
    "fal" => (0x0000, 0x0000),
    "fall" => (0x0000, 0x0000),
    "falli" => (0x0000, 0x0000),
    "fallin" => (0x0000, 0x0000),
    "falling" => (0x0000, 0x0000),
    "fallingd" => (0x0000, 0x0000),
    "fallingdo" => (0x0000, 0x0000),
    "fallingdot" => (0x0000, 0x0000),
    "fallingdots" => (0x0000, 0x0000),
    "fallingdotse" => (0x0000, 0x0000),
    "fallingdotseq" => (0x0000, 0x0000),
    "fallingdotseq;" => (0x2252, 0x0000),
    "fc" => (0x0000, 0x0000),
    "fcy" => (0x0000, 0x0000),
    "fcy;" => (0x0444, 0x0000),
    "fe" => (0x0000, 0x0000),
    "fem" => (0x0000, 0x0000),
    "fema" => (0x0000, 0x0000),
    "femal" => (0x0000, 0x0000),
    "female" => (0x0000, 0x0000),
    "female;" => (0x2640, 0x0000),
    "ff" => (0x0000, 0x0000),
    "ffi" => (0x0000, 0x0000),
    "ffil" => (0x0000, 0x0000),
    "ffili" => (0x0000, 0x0000),
    "ffilig" => (0x0000, 0x0000),
    "ffilig;" => (0xFB03, 0x0000),
    "ffl" => (0x0000, 0x0000),
    "ffli" => (0x0000, 0x0000),
    "fflig" => (0x0000, 0x0000),
    "fflig;" => (0xFB00, 0x0000),
    "ffll" => (0x0000, 0x0000),
    "fflli" => (0x0000, 0x0000),
    "ffllig" => (0x0000, 0x0000),
    "ffllig;" => (0xFB04, 0x0000),
    "ffr" => (0x0000, 0x0000),
    "ffr;" => (0x1D523, 0x0000),
    "fi" => (0x0000, 0x0000),
    "fil" => (0x0000, 0x0000),
    "fili" => (0x0000, 0x0000),
    "filig" => (0x0000, 0x0000),
    "filig;" => (0xFB01, 0x0000),
    "fj" => (0x0000, 0x0000),
    "fjl" => (0x0000, 0x0000),
    "fjli" => (0x0000, 0x0000),
    "fjlig" => (0x0000, 0x0000),
    "fjlig;" => (0x0066, 0x006A),
    "fl" => (0x0000, 0x0000),
    "fla" => (0x0000, 0x0000),
    "flat" => (0x0000, 0x0000),
    "flat;" => (0x266D, 0x0000),
    "fll" => (0x0000, 0x0000),
    "flli" => (0x0000, 0x0000),
    "fllig" => (0x0000, 0x0000),
    "fllig;" => (0xFB02, 0x0000),
    "flt" => (0x0000, 0x0000),
    "fltn" => (0x0000, 0x0000),
    "fltns" => (0x0000, 0x0000),
    "fltns;" => (0x25B1, 0x0000),
    "fn" => (0x0000, 0x0000),
    "fno" => (0x0000, 0x0000),
    "fnof" => (0x0000, 0x0000),
    "fnof;" => (0x0192, 0x0000),
    "fo" => (0x0000, 0x0000),
    "fop" => (0x0000, 0x0000),
    "fopf" => (0x0000, 0x0000),
    "fopf;" => (0x1D557, 0x0000),
    "for" => (0x0000, 0x0000),
    "fora" => (0x0000, 0x0000),
    "foral" => (0x0000, 0x0000),
    "forall" => (0x0000, 0x0000),
    "forall;" => (0x2200, 0x0000),
    "fork" => (0x0000, 0x0000),
    "fork;" => (0x22D4, 0x0000),
    "forkv" => (0x0000, 0x0000),
    "forkv;" => (0x2AD9, 0x0000),
    "fp" => (0x0000, 0x0000),
    "fpa" => (0x0000, 0x0000),
    "fpar" => (0x0000, 0x0000),
    "fpart" => (0x0000, 0x0000),
    "fparti" => (0x0000, 0x0000),
    "fpartin" => (0x0000, 0x0000),
    "fpartint" => (0x0000, 0x0000),
    "fpartint;" => (0x2A0D, 0x0000),
    "fr" => (0x0000, 0x0000),
    "fra" => (0x0000, 0x0000),
    "frac" => (0x0000, 0x0000),
    "frac1" => (0x0000, 0x0000),
    "frac12" => (0x00BD, 0x0000),
    "frac12;" => (0x00BD, 0x0000),
    "frac13" => (0x0000, 0x0000),
    "frac13;" => (0x2153, 0x0000),
    "frac14" => (0x00BC, 0x0000),
    "frac14;" => (0x00BC, 0x0000),
    "frac15" => (0x0000, 0x0000),
    "frac15;" => (0x2155, 0x0000),
    "frac16" => (0x0000, 0x0000),
    "frac16;" => (0x2159, 0x0000),
    "frac18" => (0x0000, 0x0000),
    "frac18;" => (0x215B, 0x0000),
    "frac2" => (0x0000, 0x0000),
    "frac23" => (0x0000, 0x0000),
    "frac23;" => (0x2154, 0x0000),
    "frac25" => (0x0000, 0x0000),
    "frac25;" => (0x2156, 0x0000),
    "frac3" => (0x0000, 0x0000),
    "frac34" => (0x00BE, 0x0000),
    "frac34;" => (0x00BE, 0x0000),
    "frac35" => (0x0000, 0x0000),
    "frac35;" => (0x2157, 0x0000),
    "frac38" => (0x0000, 0x0000),
    "frac38;" => (0x215C, 0x0000),
    "frac4" => (0x0000, 0x0000),
    "frac45" => (0x0000, 0x0000),
    "frac45;" => (0x2158, 0x0000),
    "frac5" => (0x0000, 0x0000),
    "frac56" => (0x0000, 0x0000),
    "frac56;" => (0x215A, 0x0000),
    "frac58" => (0x0000, 0x0000),
    "frac58;" => (0x215D, 0x0000),
    "frac7" => (0x0000, 0x0000),
    "frac78" => (0x0000, 0x0000),
    "frac78;" => (0x215E, 0x0000),
    "fras" => (0x0000, 0x0000),
    "frasl" => (0x0000, 0x0000),
    "frasl;" => (0x2044, 0x0000),
    "fro" => (0x0000, 0x0000),
    "frow" => (0x0000, 0x0000),
    "frown" => (0x0000, 0x0000),
    "frown;" => (0x2322, 0x0000),
    "fs" => (0x0000, 0x0000),
    "fsc" => (0x0000, 0x0000),
    "fscr" => (0x0000, 0x0000),
    "fscr;" => (0x1D4BB, 0x0000),
    "g" => (0x0000, 0x0000),
    "gE" => (0x0000, 0x0000),
    "gE;" => (0x2267, 0x0000),
    "gEl" => (0x0000, 0x0000),
    "gEl;" => (0x2A8C, 0x0000),
    "ga" => (0x0000, 0x0000),
    "gac" => (0x0000, 0x0000),
    "gacu" => (0x0000, 0x0000),
    "gacut" => (0x0000, 0x0000),
    "gacute" => (0x0000, 0x0000),
    "gacute;" => (0x01F5, 0x0000),
    "gam" => (0x0000, 0x0000),
    "gamm" => (0x0000, 0x0000),
    "gamma" => (0x0000, 0x0000),
    "gamma;" => (0x03B3, 0x0000),
    "gammad" => (0x0000, 0x0000),
    "gammad;" => (0x03DD, 0x0000),
    "gap" => (0x0000, 0x0000),
    "gap;" => (0x2A86, 0x0000),
    "gb" => (0x0000, 0x0000),
    "gbr" => (0x0000, 0x0000),
    "gbre" => (0x0000, 0x0000),
    "gbrev" => (0x0000, 0x0000),
    "gbreve" => (0x0000, 0x0000),
    "gbreve;" => (0x011F, 0x0000),
    "gc" => (0x0000, 0x0000),
    "gci" => (0x0000, 0x0000),
    "gcir" => (0x0000, 0x0000),
    "gcirc" => (0x0000, 0x0000),
    "gcirc;" => (0x011D, 0x0000),
    "gcy" => (0x0000, 0x0000),
    "gcy;" => (0x0433, 0x0000),
    "gd" => (0x0000, 0x0000),
    "gdo" => (0x0000, 0x0000),
    "gdot" => (0x0000, 0x0000),
    "gdot;" => (0x0121, 0x0000),
    "ge" => (0x0000, 0x0000),
    "ge;" => (0x2265, 0x0000),
    "gel" => (0x0000, 0x0000),
    "gel;" => (0x22DB, 0x0000),
    "geq" => (0x0000, 0x0000),
    "geq;" => (0x2265, 0x0000),
    "geqq" => (0x0000, 0x0000),
    "geqq;" => (0x2267, 0x0000),
    "geqs" => (0x0000, 0x0000),
    "geqsl" => (0x0000, 0x0000),
    "geqsla" => (0x0000, 0x0000),
    "geqslan" => (0x0000, 0x0000),
    "geqslant" => (0x0000, 0x0000),
    "geqslant;" => (0x2A7E, 0x0000),
    "ges" => (0x0000, 0x0000),
    "ges;" => (0x2A7E, 0x0000),
    "gesc" => (0x0000, 0x0000),
    "gescc" => (0x0000, 0x0000),
    "gescc;" => (0x2AA9, 0x0000),
    "gesd" => (0x0000, 0x0000),
    "gesdo" => (0x0000, 0x0000),
    "gesdot" => (0x0000, 0x0000),
    "gesdot;" => (0x2A80, 0x0000),
    "gesdoto" => (0x0000, 0x0000),
    "gesdoto;" => (0x2A82, 0x0000),
    "gesdotol" => (0x0000, 0x0000),
    "gesdotol;" => (0x2A84, 0x0000),
    "gesl" => (0x0000, 0x0000),
    "gesl;" => (0x22DB, 0xFE00),
    "gesle" => (0x0000, 0x0000),
    "gesles" => (0x0000, 0x0000),
    "gesles;" => (0x2A94, 0x0000),
    "gf" => (0x0000, 0x0000),
    "gfr" => (0x0000, 0x0000),
    "gfr;" => (0x1D524, 0x0000),
    "gg" => (0x0000, 0x0000),
    "gg;" => (0x226B, 0x0000),
    "ggg" => (0x0000, 0x0000),
    "ggg;" => (0x22D9, 0x0000),
    "gi" => (0x0000, 0x0000),
    "gim" => (0x0000, 0x0000),
    "gime" => (0x0000, 0x0000),
    "gimel" => (0x0000, 0x0000),
    "gimel;" => (0x2137, 0x0000),
    "gj" => (0x0000, 0x0000),
    "gjc" => (0x0000, 0x0000),
    "gjcy" => (0x0000, 0x0000),
    "gjcy;" => (0x0453, 0x0000),
    "gl" => (0x0000, 0x0000),
    "gl;" => (0x2277, 0x0000),
    "glE" => (0x0000, 0x0000),
    "glE;" => (0x2A92, 0x0000),
    "gla" => (0x0000, 0x0000),
    "gla;" => (0x2AA5, 0x0000),
    "glj" => (0x0000, 0x0000),
    "glj;" => (0x2AA4, 0x0000),
    "gn" => (0x0000, 0x0000),
    "gnE" => (0x0000, 0x0000),
    "gnE;" => (0x2269, 0x0000),
    "gna" => (0x0000, 0x0000),
    "gnap" => (0x0000, 0x0000),
    "gnap;" => (0x2A8A, 0x0000),
    "gnapp" => (0x0000, 0x0000),
    "gnappr" => (0x0000, 0x0000),
    "gnappro" => (0x0000, 0x0000),
    "gnapprox" => (0x0000, 0x0000),
    "gnapprox;" => (0x2A8A, 0x0000),
    "gne" => (0x0000, 0x0000),
    "gne;" => (0x2A88, 0x0000),
    "gneq" => (0x0000, 0x0000),
    "gneq;" => (0x2A88, 0x0000),
    "gneqq" => (0x0000, 0x0000),
    "gneqq;" => (0x2269, 0x0000),
    "gns" => (0x0000, 0x0000),
    "gnsi" => (0x0000, 0x0000),
    "gnsim" => (0x0000, 0x0000),
    "gnsim;" => (0x22E7, 0x0000),
    "go" => (0x0000, 0x0000),
    "gop" => (0x0000, 0x0000),
    "gopf" => (0x0000, 0x0000),
    "gopf;" => (0x1D558, 0x0000),
    "gr" => (0x0000, 0x0000),
    "gra" => (0x0000, 0x0000),
    "grav" => (0x0000, 0x0000),
    "grave" => (0x0000, 0x0000),
    "grave;" => (0x0060, 0x0000),
    "gs" => (0x0000, 0x0000),
    "gsc" => (0x0000, 0x0000),
    "gscr" => (0x0000, 0x0000),
    "gscr;" => (0x210A, 0x0000),
    "gsi" => (0x0000, 0x0000),
    "gsim" => (0x0000, 0x0000),
    "gsim;" => (0x2273, 0x0000),
    "gsime" => (0x0000, 0x0000),
    "gsime;" => (0x2A8E, 0x0000),
    "gsiml" => (0x0000, 0x0000),
    "gsiml;" => (0x2A90, 0x0000),
    "gt" => (0x003E, 0x0000),
    "gt;" => (0x003E, 0x0000),
    "gtc" => (0x0000, 0x0000),
    "gtcc" => (0x0000, 0x0000),
    "gtcc;" => (0x2AA7, 0x0000),
    "gtci" => (0x0000, 0x0000),
    "gtcir" => (0x0000, 0x0000),
    "gtcir;" => (0x2A7A, 0x0000),
    "gtd" => (0x0000, 0x0000),
    "gtdo" => (0x0000, 0x0000),
    "gtdot" => (0x0000, 0x0000),
    "gtdot;" => (0x22D7, 0x0000),
    "gtl" => (0x0000, 0x0000),
    "gtlP" => (0x0000, 0x0000),
    "gtlPa" => (0x0000, 0x0000),
    "gtlPar" => (0x0000, 0x0000),
    "gtlPar;" => (0x2995, 0x0000),
    "gtq" => (0x0000, 0x0000),
    "gtqu" => (0x0000, 0x0000),
    "gtque" => (0x0000, 0x0000),
    "gtques" => (0x0000, 0x0000),
    "gtquest" => (0x0000, 0x0000),
    "gtquest;" => (0x2A7C, 0x0000),
    "gtr" => (0x0000, 0x0000),
    "gtra" => (0x0000, 0x0000),
    "gtrap" => (0x0000, 0x0000),
    "gtrapp" => (0x0000, 0x0000),
    "gtrappr" => (0x0000, 0x0000),
    "gtrappro" => (0x0000, 0x0000),
    "gtrapprox" => (0x0000, 0x0000),
    "gtrapprox;" => (0x2A86, 0x0000),
    "gtrar" => (0x0000, 0x0000),
    "gtrarr" => (0x0000, 0x0000),
    "gtrarr;" => (0x2978, 0x0000),
    "gtrd" => (0x0000, 0x0000),
    "gtrdo" => (0x0000, 0x0000),
    "gtrdot" => (0x0000, 0x0000),
    "gtrdot;" => (0x22D7, 0x0000),
    "gtre" => (0x0000, 0x0000),
    "gtreq" => (0x0000, 0x0000),
    "gtreql" => (0x0000, 0x0000),
    "gtreqle" => (0x0000, 0x0000),
    "gtreqles" => (0x0000, 0x0000),
    "gtreqless" => (0x0000, 0x0000),
    "gtreqless;" => (0x22DB, 0x0000),
    "gtreqq" => (0x0000, 0x0000),
    "gtreqql" => (0x0000, 0x0000),
    "gtreqqle" => (0x0000, 0x0000),
    "gtreqqles" => (0x0000, 0x0000),
    "gtreqqless" => (0x0000, 0x0000),
    "gtreqqless;" => (0x2A8C, 0x0000),
    "gtrl" => (0x0000, 0x0000),
    "gtrle" => (0x0000, 0x0000),
    "gtrles" => (0x0000, 0x0000),
    "gtrless" => (0x0000, 0x0000),
    "gtrless;" => (0x2277, 0x0000),
    "gtrs" => (0x0000, 0x0000),
    "gtrsi" => (0x0000, 0x0000),
    "gtrsim" => (0x0000, 0x0000),
    "gtrsim;" => (0x2273, 0x0000),
    "gv" => (0x0000, 0x0000),
    "gve" => (0x0000, 0x0000),
    "gver" => (0x0000, 0x0000),
    "gvert" => (0x0000, 0x0000),
    "gvertn" => (0x0000, 0x0000),
    "gvertne" => (0x0000, 0x0000),
    "gvertneq" => (0x0000, 0x0000),
    "gvertneqq" => (0x0000, 0x0000),
    "gvertneqq;" => (0x2269, 0xFE00),
    "gvn" => (0x0000, 0x0000),
    "gvnE" => (0x0000, 0x0000),
    "gvnE;" => (0x2269, 0xFE00),
    "h" => (0x0000, 0x0000),
    "hA" => (0x0000, 0x0000),
    "hAr" => (0x0000, 0x0000),
    "hArr" => (0x0000, 0x0000),
    "hArr;" => (0x21D4, 0x0000),
    "ha" => (0x0000, 0x0000),
    "hai" => (0x0000, 0x0000),
    "hair" => (0x0000, 0x0000),
    "hairs" => (0x0000, 0x0000),
    "hairsp" => (0x0000, 0x0000),
    "hairsp;" => (0x200A, 0x0000),
    "hal" => (0x0000, 0x0000),
    "half" => (0x0000, 0x0000),
    "half;" => (0x00BD, 0x0000),
    "ham" => (0x0000, 0x0000),
    "hami" => (0x0000, 0x0000),
    "hamil" => (0x0000, 0x0000),
    "hamilt" => (0x0000, 0x0000),
    "hamilt;" => (0x210B, 0x0000),
    "har" => (0x0000, 0x0000),
    "hard" => (0x0000, 0x0000),
    "hardc" => (0x0000, 0x0000),
    "hardcy" => (0x0000, 0x0000),
    "hardcy;" => (0x044A, 0x0000),
    "harr" => (0x0000, 0x0000),
    "harr;" => (0x2194, 0x0000),
    "harrc" => (0x0000, 0x0000),
    "harrci" => (0x0000, 0x0000),
    "harrcir" => (0x0000, 0x0000),
    "harrcir;" => (0x2948, 0x0000),
    "harrw" => (0x0000, 0x0000),
    "harrw;" => (0x21AD, 0x0000),
    "hb" => (0x0000, 0x0000),
    "hba" => (0x0000, 0x0000),
    "hbar" => (0x0000, 0x0000),
    "hbar;" => (0x210F, 0x0000),
    "hc" => (0x0000, 0x0000),
    "hci" => (0x0000, 0x0000),
    "hcir" => (0x0000, 0x0000),
    "hcirc" => (0x0000, 0x0000),
    "hcirc;" => (0x0125, 0x0000),
    "he" => (0x0000, 0x0000),
    "hea" => (0x0000, 0x0000),
    "hear" => (0x0000, 0x0000),
    "heart" => (0x0000, 0x0000),
    "hearts" => (0x0000, 0x0000),
    "hearts;" => (0x2665, 0x0000),
    "heartsu" => (0x0000, 0x0000),
    "heartsui" => (0x0000, 0x0000),
    "heartsuit" => (0x0000, 0x0000),
    "heartsuit;" => (0x2665, 0x0000),
    "hel" => (0x0000, 0x0000),
    "hell" => (0x0000, 0x0000),
    "helli" => (0x0000, 0x0000),
    "hellip" => (0x0000, 0x0000),
    "hellip;" => (0x2026, 0x0000),
    "her" => (0x0000, 0x0000),
    "herc" => (0x0000, 0x0000),
    "herco" => (0x0000, 0x0000),
    "hercon" => (0x0000, 0x0000),
    "hercon;" => (0x22B9, 0x0000),
    "hf" => (0x0000, 0x0000),
    "hfr" => (0x0000, 0x0000),
    "hfr;" => (0x1D525, 0x0000),
    "hk" => (0x0000, 0x0000),
    "hks" => (0x0000, 0x0000),
    "hkse" => (0x0000, 0x0000),
    "hksea" => (0x0000, 0x0000),
    "hksear" => (0x0000, 0x0000),
    "hksearo" => (0x0000, 0x0000),
    "hksearow" => (0x0000, 0x0000),
    "hksearow;" => (0x2925, 0x0000),
    "hksw" => (0x0000, 0x0000),
    "hkswa" => (0x0000, 0x0000),
    "hkswar" => (0x0000, 0x0000),
    "hkswaro" => (0x0000, 0x0000),
    "hkswarow" => (0x0000, 0x0000),
    "hkswarow;" => (0x2926, 0x0000),
    "ho" => (0x0000, 0x0000),
    "hoa" => (0x0000, 0x0000),
    "hoar" => (0x0000, 0x0000),
    "hoarr" => (0x0000, 0x0000),
    "hoarr;" => (0x21FF, 0x0000),
    "hom" => (0x0000, 0x0000),
    "homt" => (0x0000, 0x0000),
    "homth" => (0x0000, 0x0000),
    "homtht" => (0x0000, 0x0000),
    "homtht;" => (0x223B, 0x0000),
    "hoo" => (0x0000, 0x0000),
    "hook" => (0x0000, 0x0000),
    "hookl" => (0x0000, 0x0000),
    "hookle" => (0x0000, 0x0000),
    "hooklef" => (0x0000, 0x0000),
    "hookleft" => (0x0000, 0x0000),
    "hooklefta" => (0x0000, 0x0000),
    "hookleftar" => (0x0000, 0x0000),
    "hookleftarr" => (0x0000, 0x0000),
    "hookleftarro" => (0x0000, 0x0000),
    "hookleftarrow" => (0x0000, 0x0000),
    "hookleftarrow;" => (0x21A9, 0x0000),
    "hookr" => (0x0000, 0x0000),
    "hookri" => (0x0000, 0x0000),
    "hookrig" => (0x0000, 0x0000),
    "hookrigh" => (0x0000, 0x0000),
    "hookright" => (0x0000, 0x0000),
    "hookrighta" => (0x0000, 0x0000),
    "hookrightar" => (0x0000, 0x0000),
    "hookrightarr" => (0x0000, 0x0000),
    "hookrightarro" => (0x0000, 0x0000),
    "hookrightarrow" => (0x0000, 0x0000),
    "hookrightarrow;" => (0x21AA, 0x0000),
    "hop" => (0x0000, 0x0000),
    "hopf" => (0x0000, 0x0000),
    "hopf;" => (0x1D559, 0x0000),
    "hor" => (0x0000, 0x0000),
    "horb" => (0x0000, 0x0000),
    "horba" => (0x0000, 0x0000),
    "horbar" => (0x0000, 0x0000),
    "horbar;" => (0x2015, 0x0000),
    "hs" => (0x0000, 0x0000),
    "hsc" => (0x0000, 0x0000),
    "hscr" => (0x0000, 0x0000),
    "hscr;" => (0x1D4BD, 0x0000),
    "hsl" => (0x0000, 0x0000),
    "hsla" => (0x0000, 0x0000),
    "hslas" => (0x0000, 0x0000),
    "hslash" => (0x0000, 0x0000),
    "hslash;" => (0x210F, 0x0000),
    "hst" => (0x0000, 0x0000),
    "hstr" => (0x0000, 0x0000),
    "hstro" => (0x0000, 0x0000),
    "hstrok" => (0x0000, 0x0000),
    "hstrok;" => (0x0127, 0x0000),
    "hy" => (0x0000, 0x0000),
    "hyb" => (0x0000, 0x0000),
    "hybu" => (0x0000, 0x0000),
    "hybul" => (0x0000, 0x0000),
    "hybull" => (0x0000, 0x0000),
    "hybull;" => (0x2043, 0x0000),
    "hyp" => (0x0000, 0x0000),
    "hyph" => (0x0000, 0x0000),
    "hyphe" => (0x0000, 0x0000),
    "hyphen" => (0x0000, 0x0000),
    "hyphen;" => (0x2010, 0x0000),
    "i" => (0x0000, 0x0000),
    "ia" => (0x0000, 0x0000),
    "iac" => (0x0000, 0x0000),
    "iacu" => (0x0000, 0x0000),
    "iacut" => (0x0000, 0x0000),
    "iacute" => (0x00ED, 0x0000),
    "iacute;" => (0x00ED, 0x0000),
    "ic" => (0x0000, 0x0000),
    "ic;" => (0x2063, 0x0000),
    "ici" => (0x0000, 0x0000),
    "icir" => (0x0000, 0x0000),
    "icirc" => (0x00EE, 0x0000),
    "icirc;" => (0x00EE, 0x0000),
    "icy" => (0x0000, 0x0000),
    "icy;" => (0x0438, 0x0000),
    "ie" => (0x0000, 0x0000),
    "iec" => (0x0000, 0x0000),
    "iecy" => (0x0000, 0x0000),
    "iecy;" => (0x0435, 0x0000),
    "iex" => (0x0000, 0x0000),
    "iexc" => (0x0000, 0x0000),
    "iexcl" => (0x00A1, 0x0000),
    "iexcl;" => (0x00A1, 0x0000),
    "if" => (0x0000, 0x0000),
    "iff" => (0x0000, 0x0000),
    "iff;" => (0x21D4, 0x0000),
    "ifr" => (0x0000, 0x0000),
    "ifr;" => (0x1D526, 0x0000),
    "ig" => (0x0000, 0x0000),
    "igr" => (0x0000, 0x0000),
    "igra" => (0x0000, 0x0000),
    "igrav" => (0x0000, 0x0000),
    "igrave" => (0x00EC, 0x0000),
    "igrave;" => (0x00EC, 0x0000),
    "ii" => (0x0000, 0x0000),
    "ii;" => (0x2148, 0x0000),
    "iii" => (0x0000, 0x0000),
    "iiii" => (0x0000, 0x0000),
    "iiiin" => (0x0000, 0x0000),
    "iiiint" => (0x0000, 0x0000),
    "iiiint;" => (0x2A0C, 0x0000),
    "iiin" => (0x0000, 0x0000),
    "iiint" => (0x0000, 0x0000),
    "iiint;" => (0x222D, 0x0000),
    "iin" => (0x0000, 0x0000),
    "iinf" => (0x0000, 0x0000),
    "iinfi" => (0x0000, 0x0000),
    "iinfin" => (0x0000, 0x0000),
    "iinfin;" => (0x29DC, 0x0000),
    "iio" => (0x0000, 0x0000),
    "iiot" => (0x0000, 0x0000),
    "iiota" => (0x0000, 0x0000),
    "iiota;" => (0x2129, 0x0000),
    "ij" => (0x0000, 0x0000),
    "ijl" => (0x0000, 0x0000),
    "ijli" => (0x0000, 0x0000),
    "ijlig" => (0x0000, 0x0000),
    "ijlig;" => (0x0133, 0x0000),
    "im" => (0x0000, 0x0000),
    "ima" => (0x0000, 0x0000),
    "imac" => (0x0000, 0x0000),
    "imacr" => (0x0000, 0x0000),
    "imacr;" => (0x012B, 0x0000),
    "imag" => (0x0000, 0x0000),
    "image" => (0x0000, 0x0000),
    "image;" => (0x2111, 0x0000),
    "imagl" => (0x0000, 0x0000),
    "imagli" => (0x0000, 0x0000),
    "imaglin" => (0x0000, 0x0000),
    "imagline" => (0x0000, 0x0000),
    "imagline;" => (0x2110, 0x0000),
    "imagp" => (0x0000, 0x0000),
    "imagpa" => (0x0000, 0x0000),
    "imagpar" => (0x0000, 0x0000),
    "imagpart" => (0x0000, 0x0000),
    "imagpart;" => (0x2111, 0x0000),
    "imat" => (0x0000, 0x0000),
    "imath" => (0x0000, 0x0000),
    "imath;" => (0x0131, 0x0000),
    "imo" => (0x0000, 0x0000),
    "imof" => (0x0000, 0x0000),
    "imof;" => (0x22B7, 0x0000),
    "imp" => (0x0000, 0x0000),
    "impe" => (0x0000, 0x0000),
    "imped" => (0x0000, 0x0000),
    "imped;" => (0x01B5, 0x0000),
    "in" => (0x0000, 0x0000),
    "in;" => (0x2208, 0x0000),
    "inc" => (0x0000, 0x0000),
    "inca" => (0x0000, 0x0000),
    "incar" => (0x0000, 0x0000),
    "incare" => (0x0000, 0x0000),
    "incare;" => (0x2105, 0x0000),
    "inf" => (0x0000, 0x0000),
    "infi" => (0x0000, 0x0000),
    "infin" => (0x0000, 0x0000),
    "infin;" => (0x221E, 0x0000),
    "infint" => (0x0000, 0x0000),
    "infinti" => (0x0000, 0x0000),
    "infintie" => (0x0000, 0x0000),
    "infintie;" => (0x29DD, 0x0000),
    "ino" => (0x0000, 0x0000),
    "inod" => (0x0000, 0x0000),
    "inodo" => (0x0000, 0x0000),
    "inodot" => (0x0000, 0x0000),
    "inodot;" => (0x0131, 0x0000),
    "int" => (0x0000, 0x0000),
    "int;" => (0x222B, 0x0000),
    "intc" => (0x0000, 0x0000),
    "intca" => (0x0000, 0x0000),
    "intcal" => (0x0000, 0x0000),
    "intcal;" => (0x22BA, 0x0000),
    "inte" => (0x0000, 0x0000),
    "integ" => (0x0000, 0x0000),
    "intege" => (0x0000, 0x0000),
    "integer" => (0x0000, 0x0000),
    "integers" => (0x0000, 0x0000),
    "integers;" => (0x2124, 0x0000),
    "inter" => (0x0000, 0x0000),
    "interc" => (0x0000, 0x0000),
    "interca" => (0x0000, 0x0000),
    "intercal" => (0x0000, 0x0000),
    "intercal;" => (0x22BA, 0x0000),
    "intl" => (0x0000, 0x0000),
    "intla" => (0x0000, 0x0000),
    "intlar" => (0x0000, 0x0000),
    "intlarh" => (0x0000, 0x0000),
    "intlarhk" => (0x0000, 0x0000),
    "intlarhk;" => (0x2A17, 0x0000),
    "intp" => (0x0000, 0x0000),
    "intpr" => (0x0000, 0x0000),
    "intpro" => (0x0000, 0x0000),
    "intprod" => (0x0000, 0x0000),
    "intprod;" => (0x2A3C, 0x0000),
    "io" => (0x0000, 0x0000),
    "ioc" => (0x0000, 0x0000),
    "iocy" => (0x0000, 0x0000),
    "iocy;" => (0x0451, 0x0000),
    "iog" => (0x0000, 0x0000),
    "iogo" => (0x0000, 0x0000),
    "iogon" => (0x0000, 0x0000),
    "iogon;" => (0x012F, 0x0000),
    "iop" => (0x0000, 0x0000),
    "iopf" => (0x0000, 0x0000),
    "iopf;" => (0x1D55A, 0x0000),
    "iot" => (0x0000, 0x0000),
    "iota" => (0x0000, 0x0000),
    "iota;" => (0x03B9, 0x0000),
    "ip" => (0x0000, 0x0000),
    "ipr" => (0x0000, 0x0000),
    "ipro" => (0x0000, 0x0000),
    "iprod" => (0x0000, 0x0000),
    "iprod;" => (0x2A3C, 0x0000),
    "iq" => (0x0000, 0x0000),
    "iqu" => (0x0000, 0x0000),
    "ique" => (0x0000, 0x0000),
    "iques" => (0x0000, 0x0000),
    "iquest" => (0x00BF, 0x0000),
    "iquest;" => (0x00BF, 0x0000),
    "is" => (0x0000, 0x0000),
    "isc" => (0x0000, 0x0000),
    "iscr" => (0x0000, 0x0000),
    "iscr;" => (0x1D4BE, 0x0000),
    "isi" => (0x0000, 0x0000),
    "isin" => (0x0000, 0x0000),
    "isin;" => (0x2208, 0x0000),
    "isinE" => (0x0000, 0x0000),
    "isinE;" => (0x22F9, 0x0000),
    "isind" => (0x0000, 0x0000),
    "isindo" => (0x0000, 0x0000),
    "isindot" => (0x0000, 0x0000),
    "isindot;" => (0x22F5, 0x0000),
    "isins" => (0x0000, 0x0000),
    "isins;" => (0x22F4, 0x0000),
    "isinsv" => (0x0000, 0x0000),
    "isinsv;" => (0x22F3, 0x0000),
    "isinv" => (0x0000, 0x0000),
    "isinv;" => (0x2208, 0x0000),
    "it" => (0x0000, 0x0000),
    "it;" => (0x2062, 0x0000),
    "iti" => (0x0000, 0x0000),
    "itil" => (0x0000, 0x0000),
    "itild" => (0x0000, 0x0000),
    "itilde" => (0x0000, 0x0000),
    "itilde;" => (0x0129, 0x0000),
    "iu" => (0x0000, 0x0000),
    "iuk" => (0x0000, 0x0000),
    "iukc" => (0x0000, 0x0000),
    "iukcy" => (0x0000, 0x0000),
    "iukcy;" => (0x0456, 0x0000),
    "ium" => (0x0000, 0x0000),
    "iuml" => (0x00EF, 0x0000),
    "iuml;" => (0x00EF, 0x0000),
    "j" => (0x0000, 0x0000),
    "jc" => (0x0000, 0x0000),
    "jci" => (0x0000, 0x0000),
    "jcir" => (0x0000, 0x0000),
    "jcirc" => (0x0000, 0x0000),
    "jcirc;" => (0x0135, 0x0000),
    "jcy" => (0x0000, 0x0000),
    "jcy;" => (0x0439, 0x0000),
    "jf" => (0x0000, 0x0000),
    "jfr" => (0x0000, 0x0000),
    "jfr;" => (0x1D527, 0x0000),
    "jm" => (0x0000, 0x0000),
    "jma" => (0x0000, 0x0000),
    "jmat" => (0x0000, 0x0000),
    "jmath" => (0x0000, 0x0000),
    "jmath;" => (0x0237, 0x0000),
    "jo" => (0x0000, 0x0000),
    "jop" => (0x0000, 0x0000),
    "jopf" => (0x0000, 0x0000),
    "jopf;" => (0x1D55B, 0x0000),
    "js" => (0x0000, 0x0000),
    "jsc" => (0x0000, 0x0000),
    "jscr" => (0x0000, 0x0000),
    "jscr;" => (0x1D4BF, 0x0000),
    "jse" => (0x0000, 0x0000),
    "jser" => (0x0000, 0x0000),
    "jserc" => (0x0000, 0x0000),
    "jsercy" => (0x0000, 0x0000),
    "jsercy;" => (0x0458, 0x0000),
    "ju" => (0x0000, 0x0000),
    "juk" => (0x0000, 0x0000),
    "jukc" => (0x0000, 0x0000),
    "jukcy" => (0x0000, 0x0000),
    "jukcy;" => (0x0454, 0x0000),
    "k" => (0x0000, 0x0000),
    "ka" => (0x0000, 0x0000),
    "kap" => (0x0000, 0x0000),
    "kapp" => (0x0000, 0x0000),
    "kappa" => (0x0000, 0x0000),
    "kappa;" => (0x03BA, 0x0000),
    "kappav" => (0x0000, 0x0000),
    "kappav;" => (0x03F0, 0x0000),
    "kc" => (0x0000, 0x0000),
    "kce" => (0x0000, 0x0000),
    "kced" => (0x0000, 0x0000),
    "kcedi" => (0x0000, 0x0000),
    "kcedil" => (0x0000, 0x0000),
    "kcedil;" => (0x0137, 0x0000),
    "kcy" => (0x0000, 0x0000),
    "kcy;" => (0x043A, 0x0000),
    "kf" => (0x0000, 0x0000),
    "kfr" => (0x0000, 0x0000),
    "kfr;" => (0x1D528, 0x0000),
    "kg" => (0x0000, 0x0000),
    "kgr" => (0x0000, 0x0000),
    "kgre" => (0x0000, 0x0000),
    "kgree" => (0x0000, 0x0000),
    "kgreen" => (0x0000, 0x0000),
    "kgreen;" => (0x0138, 0x0000),
    "kh" => (0x0000, 0x0000),
    "khc" => (0x0000, 0x0000),
    "khcy" => (0x0000, 0x0000),
    "khcy;" => (0x0445, 0x0000),
    "kj" => (0x0000, 0x0000),
    "kjc" => (0x0000, 0x0000),
    "kjcy" => (0x0000, 0x0000),
    "kjcy;" => (0x045C, 0x0000),
    "ko" => (0x0000, 0x0000),
    "kop" => (0x0000, 0x0000),
    "kopf" => (0x0000, 0x0000),
    "kopf;" => (0x1D55C, 0x0000),
    "ks" => (0x0000, 0x0000),
    "ksc" => (0x0000, 0x0000),
    "kscr" => (0x0000, 0x0000),
    "kscr;" => (0x1D4C0, 0x0000),
    "l" => (0x0000, 0x0000),
    "lA" => (0x0000, 0x0000),
    "lAa" => (0x0000, 0x0000),
    "lAar" => (0x0000, 0x0000),
    "lAarr" => (0x0000, 0x0000),
    "lAarr;" => (0x21DA, 0x0000),
    "lAr" => (0x0000, 0x0000),
    "lArr" => (0x0000, 0x0000),
    "lArr;" => (0x21D0, 0x0000),
    "lAt" => (0x0000, 0x0000),
    "lAta" => (0x0000, 0x0000),
    "lAtai" => (0x0000, 0x0000),
    "lAtail" => (0x0000, 0x0000),
    "lAtail;" => (0x291B, 0x0000),
    "lB" => (0x0000, 0x0000),
    "lBa" => (0x0000, 0x0000),
    "lBar" => (0x0000, 0x0000),
    "lBarr" => (0x0000, 0x0000),
    "lBarr;" => (0x290E, 0x0000),
    "lE" => (0x0000, 0x0000),
    "lE;" => (0x2266, 0x0000),
    "lEg" => (0x0000, 0x0000),
    "lEg;" => (0x2A8B, 0x0000),
    "lH" => (0x0000, 0x0000),
    "lHa" => (0x0000, 0x0000),
    "lHar" => (0x0000, 0x0000),
    "lHar;" => (0x2962, 0x0000),
    "la" => (0x0000, 0x0000),
    "lac" => (0x0000, 0x0000),
    "lacu" => (0x0000, 0x0000),
    "lacut" => (0x0000, 0x0000),
    "lacute" => (0x0000, 0x0000),
    "lacute;" => (0x013A, 0x0000),
    "lae" => (0x0000, 0x0000),
    "laem" => (0x0000, 0x0000),
    "laemp" => (0x0000, 0x0000),
    "laempt" => (0x0000, 0x0000),
    "laempty" => (0x0000, 0x0000),
    "laemptyv" => (0x0000, 0x0000),
    "laemptyv;" => (0x29B4, 0x0000),
    "lag" => (0x0000, 0x0000),
    "lagr" => (0x0000, 0x0000),
    "lagra" => (0x0000, 0x0000),
    "lagran" => (0x0000, 0x0000),
    "lagran;" => (0x2112, 0x0000),
    "lam" => (0x0000, 0x0000),
    "lamb" => (0x0000, 0x0000),
    "lambd" => (0x0000, 0x0000),
    "lambda" => (0x0000, 0x0000),
    "lambda;" => (0x03BB, 0x0000),
    "lan" => (0x0000, 0x0000),
    "lang" => (0x0000, 0x0000),
    "lang;" => (0x27E8, 0x0000),
    "langd" => (0x0000, 0x0000),
    "langd;" => (0x2991, 0x0000),
    "langl" => (0x0000, 0x0000),
    "langle" => (0x0000, 0x0000),
    "langle;" => (0x27E8, 0x0000),
    "lap" => (0x0000, 0x0000),
    "lap;" => (0x2A85, 0x0000),
    "laq" => (0x0000, 0x0000),
    "laqu" => (0x0000, 0x0000),
    "laquo" => (0x00AB, 0x0000),
    "laquo;" => (0x00AB, 0x0000),
    "lar" => (0x0000, 0x0000),
    "larr" => (0x0000, 0x0000),
    "larr;" => (0x2190, 0x0000),
    "larrb" => (0x0000, 0x0000),
    "larrb;" => (0x21E4, 0x0000),
    "larrbf" => (0x0000, 0x0000),
    "larrbfs" => (0x0000, 0x0000),
    "larrbfs;" => (0x291F, 0x0000),
    "larrf" => (0x0000, 0x0000),
    "larrfs" => (0x0000, 0x0000),
    "larrfs;" => (0x291D, 0x0000),
    "larrh" => (0x0000, 0x0000),
    "larrhk" => (0x0000, 0x0000),
    "larrhk;" => (0x21A9, 0x0000),
    "larrl" => (0x0000, 0x0000),
    "larrlp" => (0x0000, 0x0000),
    "larrlp;" => (0x21AB, 0x0000),
    "larrp" => (0x0000, 0x0000),
    "larrpl" => (0x0000, 0x0000),
    "larrpl;" => (0x2939, 0x0000),
    "larrs" => (0x0000, 0x0000),
    "larrsi" => (0x0000, 0x0000),
    "larrsim" => (0x0000, 0x0000),
    "larrsim;" => (0x2973, 0x0000),
    "larrt" => (0x0000, 0x0000),
    "larrtl" => (0x0000, 0x0000),
    "larrtl;" => (0x21A2, 0x0000),
    "lat" => (0x0000, 0x0000),
    "lat;" => (0x2AAB, 0x0000),
    "lata" => (0x0000, 0x0000),
    "latai" => (0x0000, 0x0000),
    "latail" => (0x0000, 0x0000),
    "latail;" => (0x2919, 0x0000),
    "late" => (0x0000, 0x0000),
    "late;" => (0x2AAD, 0x0000),
    "lates" => (0x0000, 0x0000),
    "lates;" => (0x2AAD, 0xFE00),
    "lb" => (0x0000, 0x0000),
    "lba" => (0x0000, 0x0000),
    "lbar" => (0x0000, 0x0000),
    "lbarr" => (0x0000, 0x0000),
    "lbarr;" => (0x290C, 0x0000),
    "lbb" => (0x0000, 0x0000),
    "lbbr" => (0x0000, 0x0000),
    "lbbrk" => (0x0000, 0x0000),
    "lbbrk;" => (0x2772, 0x0000),
    "lbr" => (0x0000, 0x0000),
    "lbra" => (0x0000, 0x0000),
    "lbrac" => (0x0000, 0x0000),
    "lbrace" => (0x0000, 0x0000),
    "lbrace;" => (0x007B, 0x0000),
    "lbrack" => (0x0000, 0x0000),
    "lbrack;" => (0x005B, 0x0000),
    "lbrk" => (0x0000, 0x0000),
    "lbrke" => (0x0000, 0x0000),
    "lbrke;" => (0x298B, 0x0000),
    "lbrks" => (0x0000, 0x0000),
    "lbrksl" => (0x0000, 0x0000),
    "lbrksld" => (0x0000, 0x0000),
    "lbrksld;" => (0x298F, 0x0000),
    "lbrkslu" => (0x0000, 0x0000),
    "lbrkslu;" => (0x298D, 0x0000),
    "lc" => (0x0000, 0x0000),
    "lca" => (0x0000, 0x0000),
    "lcar" => (0x0000, 0x0000),
    "lcaro" => (0x0000, 0x0000),
    "lcaron" => (0x0000, 0x0000),
    "lcaron;" => (0x013E, 0x0000),
    "lce" => (0x0000, 0x0000),
    "lced" => (0x0000, 0x0000),
    "lcedi" => (0x0000, 0x0000),
    "lcedil" => (0x0000, 0x0000),
    "lcedil;" => (0x013C, 0x0000),
    "lcei" => (0x0000, 0x0000),
    "lceil" => (0x0000, 0x0000),
    "lceil;" => (0x2308, 0x0000),
    "lcu" => (0x0000, 0x0000),
    "lcub" => (0x0000, 0x0000),
    "lcub;" => (0x007B, 0x0000),
    "lcy" => (0x0000, 0x0000),
    "lcy;" => (0x043B, 0x0000),
    "ld" => (0x0000, 0x0000),
    "ldc" => (0x0000, 0x0000),
    "ldca" => (0x0000, 0x0000),
    "ldca;" => (0x2936, 0x0000),
    "ldq" => (0x0000, 0x0000),
    "ldqu" => (0x0000, 0x0000),
    "ldquo" => (0x0000, 0x0000),
    "ldquo;" => (0x201C, 0x0000),
    "ldquor" => (0x0000, 0x0000),
    "ldquor;" => (0x201E, 0x0000),
    "ldr" => (0x0000, 0x0000),
    "ldrd" => (0x0000, 0x0000),
    "ldrdh" => (0x0000, 0x0000),
    "ldrdha" => (0x0000, 0x0000),
    "ldrdhar" => (0x0000, 0x0000),
    "ldrdhar;" => (0x2967, 0x0000),
    "ldru" => (0x0000, 0x0000),
    "ldrus" => (0x0000, 0x0000),
    "ldrush" => (0x0000, 0x0000),
    "ldrusha" => (0x0000, 0x0000),
    "ldrushar" => (0x0000, 0x0000),
    "ldrushar;" => (0x294B, 0x0000),
    "lds" => (0x0000, 0x0000),
    "ldsh" => (0x0000, 0x0000),
    "ldsh;" => (0x21B2, 0x0000),
    "le" => (0x0000, 0x0000),
    "le;" => (0x2264, 0x0000),
    "lef" => (0x0000, 0x0000),
    "left" => (0x0000, 0x0000),
    "lefta" => (0x0000, 0x0000),
    "leftar" => (0x0000, 0x0000),
    "leftarr" => (0x0000, 0x0000),
    "leftarro" => (0x0000, 0x0000),
    "leftarrow" => (0x0000, 0x0000),
    "leftarrow;" => (0x2190, 0x0000),
    "leftarrowt" => (0x0000, 0x0000),
    "leftarrowta" => (0x0000, 0x0000),
    "leftarrowtai" => (0x0000, 0x0000),
    "leftarrowtail" => (0x0000, 0x0000),
    "leftarrowtail;" => (0x21A2, 0x0000),
    "lefth" => (0x0000, 0x0000),
    "leftha" => (0x0000, 0x0000),
    "lefthar" => (0x0000, 0x0000),
    "leftharp" => (0x0000, 0x0000),
    "leftharpo" => (0x0000, 0x0000),
    "leftharpoo" => (0x0000, 0x0000),
    "leftharpoon" => (0x0000, 0x0000),
    "leftharpoond" => (0x0000, 0x0000),
    "leftharpoondo" => (0x0000, 0x0000),
    "leftharpoondow" => (0x0000, 0x0000),
    "leftharpoondown" => (0x0000, 0x0000),
    "leftharpoondown;" => (0x21BD, 0x0000),
    "leftharpoonu" => (0x0000, 0x0000),
    "leftharpoonup" => (0x0000, 0x0000),
    "leftharpoonup;" => (0x21BC, 0x0000),
    "leftl" => (0x0000, 0x0000),
    "leftle" => (0x0000, 0x0000),
    "leftlef" => (0x0000, 0x0000),
    "leftleft" => (0x0000, 0x0000),
    "leftlefta" => (0x0000, 0x0000),
    "leftleftar" => (0x0000, 0x0000),
    "leftleftarr" => (0x0000, 0x0000),
    "leftleftarro" => (0x0000, 0x0000),
    "leftleftarrow" => (0x0000, 0x0000),
    "leftleftarrows" => (0x0000, 0x0000),
    "leftleftarrows;" => (0x21C7, 0x0000),
    "leftr" => (0x0000, 0x0000),
    "leftri" => (0x0000, 0x0000),
    "leftrig" => (0x0000, 0x0000),
    "leftrigh" => (0x0000, 0x0000),
    "leftright" => (0x0000, 0x0000),
    "leftrighta" => (0x0000, 0x0000),
    "leftrightar" => (0x0000, 0x0000),
    "leftrightarr" => (0x0000, 0x0000),
    "leftrightarro" => (0x0000, 0x0000),
    "leftrightarrow" => (0x0000, 0x0000),
    "leftrightarrow;" => (0x2194, 0x0000),
    "leftrightarrows" => (0x0000, 0x0000),
    "leftrightarrows;" => (0x21C6, 0x0000),
    "leftrighth" => (0x0000, 0x0000),
    "leftrightha" => (0x0000, 0x0000),
    "leftrighthar" => (0x0000, 0x0000),
    "leftrightharp" => (0x0000, 0x0000),
    "leftrightharpo" => (0x0000, 0x0000),
    "leftrightharpoo" => (0x0000, 0x0000),
    "leftrightharpoon" => (0x0000, 0x0000),
    "leftrightharpoons" => (0x0000, 0x0000),
    "leftrightharpoons;" => (0x21CB, 0x0000),
    "leftrights" => (0x0000, 0x0000),
    "leftrightsq" => (0x0000, 0x0000),
    "leftrightsqu" => (0x0000, 0x0000),
    "leftrightsqui" => (0x0000, 0x0000),
    "leftrightsquig" => (0x0000, 0x0000),
    "leftrightsquiga" => (0x0000, 0x0000),
    "leftrightsquigar" => (0x0000, 0x0000),
    "leftrightsquigarr" => (0x0000, 0x0000),
    "leftrightsquigarro" => (0x0000, 0x0000),
    "leftrightsquigarrow" => (0x0000, 0x0000),
    "leftrightsquigarrow;" => (0x21AD, 0x0000),
    "leftt" => (0x0000, 0x0000),
    "leftth" => (0x0000, 0x0000),
    "leftthr" => (0x0000, 0x0000),
    "leftthre" => (0x0000, 0x0000),
    "leftthree" => (0x0000, 0x0000),
    "leftthreet" => (0x0000, 0x0000),
    "leftthreeti" => (0x0000, 0x0000),
    "leftthreetim" => (0x0000, 0x0000),
    "leftthreetime" => (0x0000, 0x0000),
    "leftthreetimes" => (0x0000, 0x0000),
    "leftthreetimes;" => (0x22CB, 0x0000),
    "leg" => (0x0000, 0x0000),
    "leg;" => (0x22DA, 0x0000),
    "leq" => (0x0000, 0x0000),
    "leq;" => (0x2264, 0x0000),
    "leqq" => (0x0000, 0x0000),
    "leqq;" => (0x2266, 0x0000),
    "leqs" => (0x0000, 0x0000),
    "leqsl" => (0x0000, 0x0000),
    "leqsla" => (0x0000, 0x0000),
    "leqslan" => (0x0000, 0x0000),
    "leqslant" => (0x0000, 0x0000),
    "leqslant;" => (0x2A7D, 0x0000),
    "les" => (0x0000, 0x0000),
    "les;" => (0x2A7D, 0x0000),
    "lesc" => (0x0000, 0x0000),
    "lescc" => (0x0000, 0x0000),
    "lescc;" => (0x2AA8, 0x0000),
    "lesd" => (0x0000, 0x0000),
    "lesdo" => (0x0000, 0x0000),
    "lesdot" => (0x0000, 0x0000),
    "lesdot;" => (0x2A7F, 0x0000),
    "lesdoto" => (0x0000, 0x0000),
    "lesdoto;" => (0x2A81, 0x0000),
    "lesdotor" => (0x0000, 0x0000),
    "lesdotor;" => (0x2A83, 0x0000),
    "lesg" => (0x0000, 0x0000),
    "lesg;" => (0x22DA, 0xFE00),
    "lesge" => (0x0000, 0x0000),
    "lesges" => (0x0000, 0x0000),
    "lesges;" => (0x2A93, 0x0000),
    "less" => (0x0000, 0x0000),
    "lessa" => (0x0000, 0x0000),
    "lessap" => (0x0000, 0x0000),
    "lessapp" => (0x0000, 0x0000),
    "lessappr" => (0x0000, 0x0000),
    "lessappro" => (0x0000, 0x0000),
    "lessapprox" => (0x0000, 0x0000),
    "lessapprox;" => (0x2A85, 0x0000),
    "lessd" => (0x0000, 0x0000),
    "lessdo" => (0x0000, 0x0000),
    "lessdot" => (0x0000, 0x0000),
    "lessdot;" => (0x22D6, 0x0000),
    "lesse" => (0x0000, 0x0000),
    "lesseq" => (0x0000, 0x0000),
    "lesseqg" => (0x0000, 0x0000),
    "lesseqgt" => (0x0000, 0x0000),
    "lesseqgtr" => (0x0000, 0x0000),
    "lesseqgtr;" => (0x22DA, 0x0000),
    "lesseqq" => (0x0000, 0x0000),
    "lesseqqg" => (0x0000, 0x0000),
    "lesseqqgt" => (0x0000, 0x0000),
    "lesseqqgtr" => (0x0000, 0x0000),
    "lesseqqgtr;" => (0x2A8B, 0x0000),
    "lessg" => (0x0000, 0x0000),
    "lessgt" => (0x0000, 0x0000),
    "lessgtr" => (0x0000, 0x0000),
    "lessgtr;" => (0x2276, 0x0000),
    "lesss" => (0x0000, 0x0000),
    "lesssi" => (0x0000, 0x0000),
    "lesssim" => (0x0000, 0x0000),
    "lesssim;" => (0x2272, 0x0000),
    "lf" => (0x0000, 0x0000),
    "lfi" => (0x0000, 0x0000),
    "lfis" => (0x0000, 0x0000),
    "lfish" => (0x0000, 0x0000),
    "lfisht" => (0x0000, 0x0000),
    "lfisht;" => (0x297C, 0x0000),
    "lfl" => (0x0000, 0x0000),
    "lflo" => (0x0000, 0x0000),
    "lfloo" => (0x0000, 0x0000),
    "lfloor" => (0x0000, 0x0000),
    "lfloor;" => (0x230A, 0x0000),
    "lfr" => (0x0000, 0x0000),
    "lfr;" => (0x1D529, 0x0000),
    "lg" => (0x0000, 0x0000),
    "lg;" => (0x2276, 0x0000),
    "lgE" => (0x0000, 0x0000),
    "lgE;" => (0x2A91, 0x0000),
    "lh" => (0x0000, 0x0000),
    "lha" => (0x0000, 0x0000),
    "lhar" => (0x0000, 0x0000),
    "lhard" => (0x0000, 0x0000),
    "lhard;" => (0x21BD, 0x0000),
    "lharu" => (0x0000, 0x0000),
    "lharu;" => (0x21BC, 0x0000),
    "lharul" => (0x0000, 0x0000),
    "lharul;" => (0x296A, 0x0000),
    "lhb" => (0x0000, 0x0000),
    "lhbl" => (0x0000, 0x0000),
    "lhblk" => (0x0000, 0x0000),
    "lhblk;" => (0x2584, 0x0000),
    "lj" => (0x0000, 0x0000),
    "ljc" => (0x0000, 0x0000),
    "ljcy" => (0x0000, 0x0000),
    "ljcy;" => (0x0459, 0x0000),
    "ll" => (0x0000, 0x0000),
    "ll;" => (0x226A, 0x0000),
    "lla" => (0x0000, 0x0000),
    "llar" => (0x0000, 0x0000),
    "llarr" => (0x0000, 0x0000),
    "llarr;" => (0x21C7, 0x0000),
    "llc" => (0x0000, 0x0000),
    "llco" => (0x0000, 0x0000),
    "llcor" => (0x0000, 0x0000),
    "llcorn" => (0x0000, 0x0000),
    "llcorne" => (0x0000, 0x0000),
    "llcorner" => (0x0000, 0x0000),
    "llcorner;" => (0x231E, 0x0000),
    "llh" => (0x0000, 0x0000),
    "llha" => (0x0000, 0x0000),
    "llhar" => (0x0000, 0x0000),
    "llhard" => (0x0000, 0x0000),
    "llhard;" => (0x296B, 0x0000),
    "llt" => (0x0000, 0x0000),
    "lltr" => (0x0000, 0x0000),
    "lltri" => (0x0000, 0x0000),
    "lltri;" => (0x25FA, 0x0000),
    "lm" => (0x0000, 0x0000),
    "lmi" => (0x0000, 0x0000),
    "lmid" => (0x0000, 0x0000),
    "lmido" => (0x0000, 0x0000),
    "lmidot" => (0x0000, 0x0000),
    "lmidot;" => (0x0140, 0x0000),
    "lmo" => (0x0000, 0x0000),
    "lmou" => (0x0000, 0x0000),
    "lmous" => (0x0000, 0x0000),
    "lmoust" => (0x0000, 0x0000),
    "lmoust;" => (0x23B0, 0x0000),
    "lmousta" => (0x0000, 0x0000),
    "lmoustac" => (0x0000, 0x0000),
    "lmoustach" => (0x0000, 0x0000),
    "lmoustache" => (0x0000, 0x0000),
    "lmoustache;" => (0x23B0, 0x0000),
    "ln" => (0x0000, 0x0000),
    "lnE" => (0x0000, 0x0000),
    "lnE;" => (0x2268, 0x0000),
    "lna" => (0x0000, 0x0000),
    "lnap" => (0x0000, 0x0000),
    "lnap;" => (0x2A89, 0x0000),
    "lnapp" => (0x0000, 0x0000),
    "lnappr" => (0x0000, 0x0000),
    "lnappro" => (0x0000, 0x0000),
    "lnapprox" => (0x0000, 0x0000),
    "lnapprox;" => (0x2A89, 0x0000),
    "lne" => (0x0000, 0x0000),
    "lne;" => (0x2A87, 0x0000),
    "lneq" => (0x0000, 0x0000),
    "lneq;" => (0x2A87, 0x0000),
    "lneqq" => (0x0000, 0x0000),
    "lneqq;" => (0x2268, 0x0000),
    "lns" => (0x0000, 0x0000),
    "lnsi" => (0x0000, 0x0000),
    "lnsim" => (0x0000, 0x0000),
    "lnsim;" => (0x22E6, 0x0000),
    "lo" => (0x0000, 0x0000),
    "loa" => (0x0000, 0x0000),
    "loan" => (0x0000, 0x0000),
    "loang" => (0x0000, 0x0000),
    "loang;" => (0x27EC, 0x0000),
    "loar" => (0x0000, 0x0000),
    "loarr" => (0x0000, 0x0000),
    "loarr;" => (0x21FD, 0x0000),
    "lob" => (0x0000, 0x0000),
    "lobr" => (0x0000, 0x0000),
    "lobrk" => (0x0000, 0x0000),
    "lobrk;" => (0x27E6, 0x0000),
    "lon" => (0x0000, 0x0000),
    "long" => (0x0000, 0x0000),
    "longl" => (0x0000, 0x0000),
    "longle" => (0x0000, 0x0000),
    "longlef" => (0x0000, 0x0000),
    "longleft" => (0x0000, 0x0000),
    "longlefta" => (0x0000, 0x0000),
    "longleftar" => (0x0000, 0x0000),
    "longleftarr" => (0x0000, 0x0000),
    "longleftarro" => (0x0000, 0x0000),
    "longleftarrow" => (0x0000, 0x0000),
    "longleftarrow;" => (0x27F5, 0x0000),
    "longleftr" => (0x0000, 0x0000),
    "longleftri" => (0x0000, 0x0000),
    "longleftrig" => (0x0000, 0x0000),
    "longleftrigh" => (0x0000, 0x0000),
    "longleftright" => (0x0000, 0x0000),
    "longleftrighta" => (0x0000, 0x0000),
    "longleftrightar" => (0x0000, 0x0000),
    "longleftrightarr" => (0x0000, 0x0000),
    "longleftrightarro" => (0x0000, 0x0000),
    "longleftrightarrow" => (0x0000, 0x0000),
    "longleftrightarrow;" => (0x27F7, 0x0000),
    "longm" => (0x0000, 0x0000),
    "longma" => (0x0000, 0x0000),
    "longmap" => (0x0000, 0x0000),
    "longmaps" => (0x0000, 0x0000),
    "longmapst" => (0x0000, 0x0000),
    "longmapsto" => (0x0000, 0x0000),
    "longmapsto;" => (0x27FC, 0x0000),
    "longr" => (0x0000, 0x0000),
    "longri" => (0x0000, 0x0000),
    "longrig" => (0x0000, 0x0000),
    "longrigh" => (0x0000, 0x0000),
    "longright" => (0x0000, 0x0000),
    "longrighta" => (0x0000, 0x0000),
    "longrightar" => (0x0000, 0x0000),
    "longrightarr" => (0x0000, 0x0000),
    "longrightarro" => (0x0000, 0x0000),
    "longrightarrow" => (0x0000, 0x0000),
    "longrightarrow;" => (0x27F6, 0x0000),
    "loo" => (0x0000, 0x0000),
    "loop" => (0x0000, 0x0000),
    "loopa" => (0x0000, 0x0000),
    "loopar" => (0x0000, 0x0000),
    "looparr" => (0x0000, 0x0000),
    "looparro" => (0x0000, 0x0000),
    "looparrow" => (0x0000, 0x0000),
    "looparrowl" => (0x0000, 0x0000),
    "looparrowle" => (0x0000, 0x0000),
    "looparrowlef" => (0x0000, 0x0000),
    "looparrowleft" => (0x0000, 0x0000),
    "looparrowleft;" => (0x21AB, 0x0000),
    "looparrowr" => (0x0000, 0x0000),
    "looparrowri" => (0x0000, 0x0000),
    "looparrowrig" => (0x0000, 0x0000),
    "looparrowrigh" => (0x0000, 0x0000),
    "looparrowright" => (0x0000, 0x0000),
    "looparrowright;" => (0x21AC, 0x0000),
    "lop" => (0x0000, 0x0000),
    "lopa" => (0x0000, 0x0000),
    "lopar" => (0x0000, 0x0000),
    "lopar;" => (0x2985, 0x0000),
    "lopf" => (0x0000, 0x0000),
    "lopf;" => (0x1D55D, 0x0000),
    "lopl" => (0x0000, 0x0000),
    "loplu" => (0x0000, 0x0000),
    "loplus" => (0x0000, 0x0000),
    "loplus;" => (0x2A2D, 0x0000),
    "lot" => (0x0000, 0x0000),
    "loti" => (0x0000, 0x0000),
    "lotim" => (0x0000, 0x0000),
    "lotime" => (0x0000, 0x0000),
    "lotimes" => (0x0000, 0x0000),
    "lotimes;" => (0x2A34, 0x0000),
    "low" => (0x0000, 0x0000),
    "lowa" => (0x0000, 0x0000),
    "lowas" => (0x0000, 0x0000),
    "lowast" => (0x0000, 0x0000),
    "lowast;" => (0x2217, 0x0000),
    "lowb" => (0x0000, 0x0000),
    "lowba" => (0x0000, 0x0000),
    "lowbar" => (0x0000, 0x0000),
    "lowbar;" => (0x005F, 0x0000),
    "loz" => (0x0000, 0x0000),
    "loz;" => (0x25CA, 0x0000),
    "loze" => (0x0000, 0x0000),
    "lozen" => (0x0000, 0x0000),
    "lozeng" => (0x0000, 0x0000),
    "lozenge" => (0x0000, 0x0000),
    "lozenge;" => (0x25CA, 0x0000),
    "lozf" => (0x0000, 0x0000),
    "lozf;" => (0x29EB, 0x0000),
    "lp" => (0x0000, 0x0000),
    "lpa" => (0x0000, 0x0000),
    "lpar" => (0x0000, 0x0000),
    "lpar;" => (0x0028, 0x0000),
    "lparl" => (0x0000, 0x0000),
    "lparlt" => (0x0000, 0x0000),
    "lparlt;" => (0x2993, 0x0000),
    "lr" => (0x0000, 0x0000),
    "lra" => (0x0000, 0x0000),
    "lrar" => (0x0000, 0x0000),
    "lrarr" => (0x0000, 0x0000),
    "lrarr;" => (0x21C6, 0x0000),
    "lrc" => (0x0000, 0x0000),
    "lrco" => (0x0000, 0x0000),
    "lrcor" => (0x0000, 0x0000),
    "lrcorn" => (0x0000, 0x0000),
    "lrcorne" => (0x0000, 0x0000),
    "lrcorner" => (0x0000, 0x0000),
    "lrcorner;" => (0x231F, 0x0000),
    "lrh" => (0x0000, 0x0000),
    "lrha" => (0x0000, 0x0000),
    "lrhar" => (0x0000, 0x0000),
    "lrhar;" => (0x21CB, 0x0000),
    "lrhard" => (0x0000, 0x0000),
    "lrhard;" => (0x296D, 0x0000),
    "lrm" => (0x0000, 0x0000),
    "lrm;" => (0x200E, 0x0000),
    "lrt" => (0x0000, 0x0000),
    "lrtr" => (0x0000, 0x0000),
    "lrtri" => (0x0000, 0x0000),
    "lrtri;" => (0x22BF, 0x0000),
    "ls" => (0x0000, 0x0000),
    "lsa" => (0x0000, 0x0000),
    "lsaq" => (0x0000, 0x0000),
    "lsaqu" => (0x0000, 0x0000),
    "lsaquo" => (0x0000, 0x0000),
    "lsaquo;" => (0x2039, 0x0000),
    "lsc" => (0x0000, 0x0000),
    "lscr" => (0x0000, 0x0000),
    "lscr;" => (0x1D4C1, 0x0000),
    "lsh" => (0x0000, 0x0000),
    "lsh;" => (0x21B0, 0x0000),
    "lsi" => (0x0000, 0x0000),
    "lsim" => (0x0000, 0x0000),
    "lsim;" => (0x2272, 0x0000),
    "lsime" => (0x0000, 0x0000),
    "lsime;" => (0x2A8D, 0x0000),
    "lsimg" => (0x0000, 0x0000),
    "lsimg;" => (0x2A8F, 0x0000),
    "lsq" => (0x0000, 0x0000),
    "lsqb" => (0x0000, 0x0000),
    "lsqb;" => (0x005B, 0x0000),
    "lsqu" => (0x0000, 0x0000),
    "lsquo" => (0x0000, 0x0000),
    "lsquo;" => (0x2018, 0x0000),
    "lsquor" => (0x0000, 0x0000),
    "lsquor;" => (0x201A, 0x0000),
    "lst" => (0x0000, 0x0000),
    "lstr" => (0x0000, 0x0000),
    "lstro" => (0x0000, 0x0000),
    "lstrok" => (0x0000, 0x0000),
    "lstrok;" => (0x0142, 0x0000),
    "lt" => (0x003C, 0x0000),
    "lt;" => (0x003C, 0x0000),
    "ltc" => (0x0000, 0x0000),
    "ltcc" => (0x0000, 0x0000),
    "ltcc;" => (0x2AA6, 0x0000),
    "ltci" => (0x0000, 0x0000),
    "ltcir" => (0x0000, 0x0000),
    "ltcir;" => (0x2A79, 0x0000),
    "ltd" => (0x0000, 0x0000),
    "ltdo" => (0x0000, 0x0000),
    "ltdot" => (0x0000, 0x0000),
    "ltdot;" => (0x22D6, 0x0000),
    "lth" => (0x0000, 0x0000),
    "lthr" => (0x0000, 0x0000),
    "lthre" => (0x0000, 0x0000),
    "lthree" => (0x0000, 0x0000),
    "lthree;" => (0x22CB, 0x0000),
    "lti" => (0x0000, 0x0000),
    "ltim" => (0x0000, 0x0000),
    "ltime" => (0x0000, 0x0000),
    "ltimes" => (0x0000, 0x0000),
    "ltimes;" => (0x22C9, 0x0000),
    "ltl" => (0x0000, 0x0000),
    "ltla" => (0x0000, 0x0000),
    "ltlar" => (0x0000, 0x0000),
    "ltlarr" => (0x0000, 0x0000),
    "ltlarr;" => (0x2976, 0x0000),
    "ltq" => (0x0000, 0x0000),
    "ltqu" => (0x0000, 0x0000),
    "ltque" => (0x0000, 0x0000),
    "ltques" => (0x0000, 0x0000),
    "ltquest" => (0x0000, 0x0000),
    "ltquest;" => (0x2A7B, 0x0000),
    "ltr" => (0x0000, 0x0000),
    "ltrP" => (0x0000, 0x0000),
    "ltrPa" => (0x0000, 0x0000),
    "ltrPar" => (0x0000, 0x0000),
    "ltrPar;" => (0x2996, 0x0000),
    "ltri" => (0x0000, 0x0000),
    "ltri;" => (0x25C3, 0x0000),
    "ltrie" => (0x0000, 0x0000),
    "ltrie;" => (0x22B4, 0x0000),
    "ltrif" => (0x0000, 0x0000),
    "ltrif;" => (0x25C2, 0x0000),
    "lu" => (0x0000, 0x0000),
    "lur" => (0x0000, 0x0000),
    "lurd" => (0x0000, 0x0000),
    "lurds" => (0x0000, 0x0000),
    "lurdsh" => (0x0000, 0x0000),
    "lurdsha" => (0x0000, 0x0000),
    "lurdshar" => (0x0000, 0x0000),
    "lurdshar;" => (0x294A, 0x0000),
    "luru" => (0x0000, 0x0000),
    "luruh" => (0x0000, 0x0000),
    "luruha" => (0x0000, 0x0000),
    "luruhar" => (0x0000, 0x0000),
    "luruhar;" => (0x2966, 0x0000),
    "lv" => (0x0000, 0x0000),
    "lve" => (0x0000, 0x0000),
    "lver" => (0x0000, 0x0000),
    "lvert" => (0x0000, 0x0000),
    "lvertn" => (0x0000, 0x0000),
    "lvertne" => (0x0000, 0x0000),
    "lvertneq" => (0x0000, 0x0000),
    "lvertneqq" => (0x0000, 0x0000),
    "lvertneqq;" => (0x2268, 0xFE00),
    "lvn" => (0x0000, 0x0000),
    "lvnE" => (0x0000, 0x0000),
    "lvnE;" => (0x2268, 0xFE00),
    "m" => (0x0000, 0x0000),
    "mD" => (0x0000, 0x0000),
    "mDD" => (0x0000, 0x0000),
    "mDDo" => (0x0000, 0x0000),
    "mDDot" => (0x0000, 0x0000),
    "mDDot;" => (0x223A, 0x0000),
    "ma" => (0x0000, 0x0000),
    "mac" => (0x0000, 0x0000),
    "macr" => (0x00AF, 0x0000),
    "macr;" => (0x00AF, 0x0000),
    "mal" => (0x0000, 0x0000),
    "male" => (0x0000, 0x0000),
    "male;" => (0x2642, 0x0000),
    "malt" => (0x0000, 0x0000),
    "malt;" => (0x2720, 0x0000),
    "malte" => (0x0000, 0x0000),
    "maltes" => (0x0000, 0x0000),
    "maltese" => (0x0000, 0x0000),
    "maltese;" => (0x2720, 0x0000),
    "map" => (0x0000, 0x0000),
    "map;" => (0x21A6, 0x0000),
    "maps" => (0x0000, 0x0000),
    "mapst" => (0x0000, 0x0000),
    "mapsto" => (0x0000, 0x0000),
    "mapsto;" => (0x21A6, 0x0000),
    "mapstod" => (0x0000, 0x0000),
    "mapstodo" => (0x0000, 0x0000),
    "mapstodow" => (0x0000, 0x0000),
    "mapstodown" => (0x0000, 0x0000),
    "mapstodown;" => (0x21A7, 0x0000),
    "mapstol" => (0x0000, 0x0000),
    "mapstole" => (0x0000, 0x0000),
    "mapstolef" => (0x0000, 0x0000),
    "mapstoleft" => (0x0000, 0x0000),
    "mapstoleft;" => (0x21A4, 0x0000),
    "mapstou" => (0x0000, 0x0000),
    "mapstoup" => (0x0000, 0x0000),
    "mapstoup;" => (0x21A5, 0x0000),
    "mar" => (0x0000, 0x0000),
    "mark" => (0x0000, 0x0000),
    "marke" => (0x0000, 0x0000),
    "marker" => (0x0000, 0x0000),
    "marker;" => (0x25AE, 0x0000),
    "mc" => (0x0000, 0x0000),
    "mco" => (0x0000, 0x0000),
    "mcom" => (0x0000, 0x0000),
    "mcomm" => (0x0000, 0x0000),
    "mcomma" => (0x0000, 0x0000),
    "mcomma;" => (0x2A29, 0x0000),
    "mcy" => (0x0000, 0x0000),
    "mcy;" => (0x043C, 0x0000),
    "md" => (0x0000, 0x0000),
    "mda" => (0x0000, 0x0000),
    "mdas" => (0x0000, 0x0000),
    "mdash" => (0x0000, 0x0000),
    "mdash;" => (0x2014, 0x0000),
    "me" => (0x0000, 0x0000),
    "mea" => (0x0000, 0x0000),
    "meas" => (0x0000, 0x0000),
    "measu" => (0x0000, 0x0000),
    "measur" => (0x0000, 0x0000),
    "measure" => (0x0000, 0x0000),
    "measured" => (0x0000, 0x0000),
    "measureda" => (0x0000, 0x0000),
    "measuredan" => (0x0000, 0x0000),
    "measuredang" => (0x0000, 0x0000),
    "measuredangl" => (0x0000, 0x0000),
    "measuredangle" => (0x0000, 0x0000),
    "measuredangle;" => (0x2221, 0x0000),
    "mf" => (0x0000, 0x0000),
    "mfr" => (0x0000, 0x0000),
    "mfr;" => (0x1D52A, 0x0000),
    "mh" => (0x0000, 0x0000),
    "mho" => (0x0000, 0x0000),
    "mho;" => (0x2127, 0x0000),
    "mi" => (0x0000, 0x0000),
    "mic" => (0x0000, 0x0000),
    "micr" => (0x0000, 0x0000),
    "micro" => (0x00B5, 0x0000),
    "micro;" => (0x00B5, 0x0000),
    "mid" => (0x0000, 0x0000),
    "mid;" => (0x2223, 0x0000),
    "mida" => (0x0000, 0x0000),
    "midas" => (0x0000, 0x0000),
    "midast" => (0x0000, 0x0000),
    "midast;" => (0x002A, 0x0000),
    "midc" => (0x0000, 0x0000),
    "midci" => (0x0000, 0x0000),
    "midcir" => (0x0000, 0x0000),
    "midcir;" => (0x2AF0, 0x0000),
    "midd" => (0x0000, 0x0000),
    "middo" => (0x0000, 0x0000),
    "middot" => (0x00B7, 0x0000),
    "middot;" => (0x00B7, 0x0000),
    "min" => (0x0000, 0x0000),
    "minu" => (0x0000, 0x0000),
    "minus" => (0x0000, 0x0000),
    "minus;" => (0x2212, 0x0000),
    "minusb" => (0x0000, 0x0000),
    "minusb;" => (0x229F, 0x0000),
    "minusd" => (0x0000, 0x0000),
    "minusd;" => (0x2238, 0x0000),
    "minusdu" => (0x0000, 0x0000),
    "minusdu;" => (0x2A2A, 0x0000),
    "ml" => (0x0000, 0x0000),
    "mlc" => (0x0000, 0x0000),
    "mlcp" => (0x0000, 0x0000),
    "mlcp;" => (0x2ADB, 0x0000),
    "mld" => (0x0000, 0x0000),
    "mldr" => (0x0000, 0x0000),
    "mldr;" => (0x2026, 0x0000),
    "mn" => (0x0000, 0x0000),
    "mnp" => (0x0000, 0x0000),
    "mnpl" => (0x0000, 0x0000),
    "mnplu" => (0x0000, 0x0000),
    "mnplus" => (0x0000, 0x0000),
    "mnplus;" => (0x2213, 0x0000),
    "mo" => (0x0000, 0x0000),
    "mod" => (0x0000, 0x0000),
    "mode" => (0x0000, 0x0000),
    "model" => (0x0000, 0x0000),
    "models" => (0x0000, 0x0000),
    "models;" => (0x22A7, 0x0000),
    "mop" => (0x0000, 0x0000),
    "mopf" => (0x0000, 0x0000),
    "mopf;" => (0x1D55E, 0x0000),
    "mp" => (0x0000, 0x0000),
    "mp;" => (0x2213, 0x0000),
    "ms" => (0x0000, 0x0000),
    "msc" => (0x0000, 0x0000),
    "mscr" => (0x0000, 0x0000),
    "mscr;" => (0x1D4C2, 0x0000),
    "mst" => (0x0000, 0x0000),
    "mstp" => (0x0000, 0x0000),
    "mstpo" => (0x0000, 0x0000),
    "mstpos" => (0x0000, 0x0000),
    "mstpos;" => (0x223E, 0x0000),
    "mu" => (0x0000, 0x0000),
    "mu;" => (0x03BC, 0x0000),
    "mul" => (0x0000, 0x0000),
    "mult" => (0x0000, 0x0000),
    "multi" => (0x0000, 0x0000),
    "multim" => (0x0000, 0x0000),
    "multima" => (0x0000, 0x0000),
    "multimap" => (0x0000, 0x0000),
    "multimap;" => (0x22B8, 0x0000),
    "mum" => (0x0000, 0x0000),
    "muma" => (0x0000, 0x0000),
    "mumap" => (0x0000, 0x0000),
    "mumap;" => (0x22B8, 0x0000),
    "n" => (0x0000, 0x0000),
    "nG" => (0x0000, 0x0000),
    "nGg" => (0x0000, 0x0000),
    "nGg;" => (0x22D9, 0x0338),
    "nGt" => (0x0000, 0x0000),
    "nGt;" => (0x226B, 0x20D2),
    "nGtv" => (0x0000, 0x0000),
    "nGtv;" => (0x226B, 0x0338),
    "nL" => (0x0000, 0x0000),
    "nLe" => (0x0000, 0x0000),
    "nLef" => (0x0000, 0x0000),
    "nLeft" => (0x0000, 0x0000),
    "nLefta" => (0x0000, 0x0000),
    "nLeftar" => (0x0000, 0x0000),
    "nLeftarr" => (0x0000, 0x0000),
    "nLeftarro" => (0x0000, 0x0000),
    "nLeftarrow" => (0x0000, 0x0000),
    "nLeftarrow;" => (0x21CD, 0x0000),
    "nLeftr" => (0x0000, 0x0000),
    "nLeftri" => (0x0000, 0x0000),
    "nLeftrig" => (0x0000, 0x0000),
    "nLeftrigh" => (0x0000, 0x0000),
    "nLeftright" => (0x0000, 0x0000),
    "nLeftrighta" => (0x0000, 0x0000),
    "nLeftrightar" => (0x0000, 0x0000),
    "nLeftrightarr" => (0x0000, 0x0000),
    "nLeftrightarro" => (0x0000, 0x0000),
    "nLeftrightarrow" => (0x0000, 0x0000),
    "nLeftrightarrow;" => (0x21CE, 0x0000),
    "nLl" => (0x0000, 0x0000),
    "nLl;" => (0x22D8, 0x0338),
    "nLt" => (0x0000, 0x0000),
    "nLt;" => (0x226A, 0x20D2),
    "nLtv" => (0x0000, 0x0000),
    "nLtv;" => (0x226A, 0x0338),
    "nR" => (0x0000, 0x0000),
    "nRi" => (0x0000, 0x0000),
    "nRig" => (0x0000, 0x0000),
    "nRigh" => (0x0000, 0x0000),
    "nRight" => (0x0000, 0x0000),
    "nRighta" => (0x0000, 0x0000),
    "nRightar" => (0x0000, 0x0000),
    "nRightarr" => (0x0000, 0x0000),
    "nRightarro" => (0x0000, 0x0000),
    "nRightarrow" => (0x0000, 0x0000),
    "nRightarrow;" => (0x21CF, 0x0000),
    "nV" => (0x0000, 0x0000),
    "nVD" => (0x0000, 0x0000),
    "nVDa" => (0x0000, 0x0000),
    "nVDas" => (0x0000, 0x0000),
    "nVDash" => (0x0000, 0x0000),
    "nVDash;" => (0x22AF, 0x0000),
    "nVd" => (0x0000, 0x0000),
    "nVda" => (0x0000, 0x0000),
    "nVdas" => (0x0000, 0x0000),
    "nVdash" => (0x0000, 0x0000),
    "nVdash;" => (0x22AE, 0x0000),
    "na" => (0x0000, 0x0000),
    "nab" => (0x0000, 0x0000),
    "nabl" => (0x0000, 0x0000),
    "nabla" => (0x0000, 0x0000),
    "nabla;" => (0x2207, 0x0000),
    "nac" => (0x0000, 0x0000),
    "nacu" => (0x0000, 0x0000),
    "nacut" => (0x0000, 0x0000),
    "nacute" => (0x0000, 0x0000),
    "nacute;" => (0x0144, 0x0000),
    "nan" => (0x0000, 0x0000),
    "nang" => (0x0000, 0x0000),
    "nang;" => (0x2220, 0x20D2),
    "nap" => (0x0000, 0x0000),
    "nap;" => (0x2249, 0x0000),
    "napE" => (0x0000, 0x0000),
    "napE;" => (0x2A70, 0x0338),
    "napi" => (0x0000, 0x0000),
    "napid" => (0x0000, 0x0000),
    "napid;" => (0x224B, 0x0338),
    "napo" => (0x0000, 0x0000),
    "napos" => (0x0000, 0x0000),
    "napos;" => (0x0149, 0x0000),
    "napp" => (0x0000, 0x0000),
    "nappr" => (0x0000, 0x0000),
    "nappro" => (0x0000, 0x0000),
    "napprox" => (0x0000, 0x0000),
    "napprox;" => (0x2249, 0x0000),
    "nat" => (0x0000, 0x0000),
    "natu" => (0x0000, 0x0000),
    "natur" => (0x0000, 0x0000),
    "natur;" => (0x266E, 0x0000),
    "natura" => (0x0000, 0x0000),
    "natural" => (0x0000, 0x0000),
    "natural;" => (0x266E, 0x0000),
    "naturals" => (0x0000, 0x0000),
    "naturals;" => (0x2115, 0x0000),
    "nb" => (0x0000, 0x0000),
    "nbs" => (0x0000, 0x0000),
    "nbsp" => (0x00A0, 0x0000),
    "nbsp;" => (0x00A0, 0x0000),
    "nbu" => (0x0000, 0x0000),
    "nbum" => (0x0000, 0x0000),
    "nbump" => (0x0000, 0x0000),
    "nbump;" => (0x224E, 0x0338),
    "nbumpe" => (0x0000, 0x0000),
    "nbumpe;" => (0x224F, 0x0338),
    "nc" => (0x0000, 0x0000),
    "nca" => (0x0000, 0x0000),
    "ncap" => (0x0000, 0x0000),
    "ncap;" => (0x2A43, 0x0000),
    "ncar" => (0x0000, 0x0000),
    "ncaro" => (0x0000, 0x0000),
    "ncaron" => (0x0000, 0x0000),
    "ncaron;" => (0x0148, 0x0000),
    "nce" => (0x0000, 0x0000),
    "nced" => (0x0000, 0x0000),
    "ncedi" => (0x0000, 0x0000),
    "ncedil" => (0x0000, 0x0000),
    "ncedil;" => (0x0146, 0x0000),
    "nco" => (0x0000, 0x0000),
    "ncon" => (0x0000, 0x0000),
    "ncong" => (0x0000, 0x0000),
    "ncong;" => (0x2247, 0x0000),
    "ncongd" => (0x0000, 0x0000),
    "ncongdo" => (0x0000, 0x0000),
    "ncongdot" => (0x0000, 0x0000),
    "ncongdot;" => (0x2A6D, 0x0338),
    "ncu" => (0x0000, 0x0000),
    "ncup" => (0x0000, 0x0000),
    "ncup;" => (0x2A42, 0x0000),
    "ncy" => (0x0000, 0x0000),
    "ncy;" => (0x043D, 0x0000),
    "nd" => (0x0000, 0x0000),
    "nda" => (0x0000, 0x0000),
    "ndas" => (0x0000, 0x0000),
    "ndash" => (0x0000, 0x0000),
    "ndash;" => (0x2013, 0x0000),
    "ne" => (0x0000, 0x0000),
    "ne;" => (0x2260, 0x0000),
    "neA" => (0x0000, 0x0000),
    "neAr" => (0x0000, 0x0000),
    "neArr" => (0x0000, 0x0000),
    "neArr;" => (0x21D7, 0x0000),
    "nea" => (0x0000, 0x0000),
    "near" => (0x0000, 0x0000),
    "nearh" => (0x0000, 0x0000),
    "nearhk" => (0x0000, 0x0000),
    "nearhk;" => (0x2924, 0x0000),
    "nearr" => (0x0000, 0x0000),
    "nearr;" => (0x2197, 0x0000),
    "nearro" => (0x0000, 0x0000),
    "nearrow" => (0x0000, 0x0000),
    "nearrow;" => (0x2197, 0x0000),
    "ned" => (0x0000, 0x0000),
    "nedo" => (0x0000, 0x0000),
    "nedot" => (0x0000, 0x0000),
    "nedot;" => (0x2250, 0x0338),
    "neq" => (0x0000, 0x0000),
    "nequ" => (0x0000, 0x0000),
    "nequi" => (0x0000, 0x0000),
    "nequiv" => (0x0000, 0x0000),
    "nequiv;" => (0x2262, 0x0000),
    "nes" => (0x0000, 0x0000),
    "nese" => (0x0000, 0x0000),
    "nesea" => (0x0000, 0x0000),
    "nesear" => (0x0000, 0x0000),
    "nesear;" => (0x2928, 0x0000),
    "nesi" => (0x0000, 0x0000),
    "nesim" => (0x0000, 0x0000),
    "nesim;" => (0x2242, 0x0338),
    "nex" => (0x0000, 0x0000),
    "nexi" => (0x0000, 0x0000),
    "nexis" => (0x0000, 0x0000),
    "nexist" => (0x0000, 0x0000),
    "nexist;" => (0x2204, 0x0000),
    "nexists" => (0x0000, 0x0000),
    "nexists;" => (0x2204, 0x0000),
    "nf" => (0x0000, 0x0000),
    "nfr" => (0x0000, 0x0000),
    "nfr;" => (0x1D52B, 0x0000),
    "ng" => (0x0000, 0x0000),
    "ngE" => (0x0000, 0x0000),
    "ngE;" => (0x2267, 0x0338),
    "nge" => (0x0000, 0x0000),
    "nge;" => (0x2271, 0x0000),
    "ngeq" => (0x0000, 0x0000),
    "ngeq;" => (0x2271, 0x0000),
    "ngeqq" => (0x0000, 0x0000),
    "ngeqq;" => (0x2267, 0x0338),
    "ngeqs" => (0x0000, 0x0000),
    "ngeqsl" => (0x0000, 0x0000),
    "ngeqsla" => (0x0000, 0x0000),
    "ngeqslan" => (0x0000, 0x0000),
    "ngeqslant" => (0x0000, 0x0000),
    "ngeqslant;" => (0x2A7E, 0x0338),
    "nges" => (0x0000, 0x0000),
    "nges;" => (0x2A7E, 0x0338),
    "ngs" => (0x0000, 0x0000),
    "ngsi" => (0x0000, 0x0000),
    "ngsim" => (0x0000, 0x0000),
    "ngsim;" => (0x2275, 0x0000),
    "ngt" => (0x0000, 0x0000),
    "ngt;" => (0x226F, 0x0000),
    "ngtr" => (0x0000, 0x0000),
    "ngtr;" => (0x226F, 0x0000),
    "nh" => (0x0000, 0x0000),
    "nhA" => (0x0000, 0x0000),
    "nhAr" => (0x0000, 0x0000),
    "nhArr" => (0x0000, 0x0000),
    "nhArr;" => (0x21CE, 0x0000),
    "nha" => (0x0000, 0x0000),
    "nhar" => (0x0000, 0x0000),
    "nharr" => (0x0000, 0x0000),
    "nharr;" => (0x21AE, 0x0000),
    "nhp" => (0x0000, 0x0000),
    "nhpa" => (0x0000, 0x0000),
    "nhpar" => (0x0000, 0x0000),
    "nhpar;" => (0x2AF2, 0x0000),
    "ni" => (0x0000, 0x0000),
    "ni;" => (0x220B, 0x0000),
    "nis" => (0x0000, 0x0000),
    "nis;" => (0x22FC, 0x0000),
    "nisd" => (0x0000, 0x0000),
    "nisd;" => (0x22FA, 0x0000),
    "niv" => (0x0000, 0x0000),
    "niv;" => (0x220B, 0x0000),
    "nj" => (0x0000, 0x0000),
    "njc" => (0x0000, 0x0000),
    "njcy" => (0x0000, 0x0000),
    "njcy;" => (0x045A, 0x0000),
    "nl" => (0x0000, 0x0000),
    "nlA" => (0x0000, 0x0000),
    "nlAr" => (0x0000, 0x0000),
    "nlArr" => (0x0000, 0x0000),
    "nlArr;" => (0x21CD, 0x0000),
    "nlE" => (0x0000, 0x0000),
    "nlE;" => (0x2266, 0x0338),
    "nla" => (0x0000, 0x0000),
    "nlar" => (0x0000, 0x0000),
    "nlarr" => (0x0000, 0x0000),
    "nlarr;" => (0x219A, 0x0000),
    "nld" => (0x0000, 0x0000),
    "nldr" => (0x0000, 0x0000),
    "nldr;" => (0x2025, 0x0000),
    "nle" => (0x0000, 0x0000),
    "nle;" => (0x2270, 0x0000),
    "nlef" => (0x0000, 0x0000),
    "nleft" => (0x0000, 0x0000),
    "nlefta" => (0x0000, 0x0000),
    "nleftar" => (0x0000, 0x0000),
    "nleftarr" => (0x0000, 0x0000),
    "nleftarro" => (0x0000, 0x0000),
    "nleftarrow" => (0x0000, 0x0000),
    "nleftarrow;" => (0x219A, 0x0000),
    "nleftr" => (0x0000, 0x0000),
    "nleftri" => (0x0000, 0x0000),
    "nleftrig" => (0x0000, 0x0000),
    "nleftrigh" => (0x0000, 0x0000),
    "nleftright" => (0x0000, 0x0000),
    "nleftrighta" => (0x0000, 0x0000),
    "nleftrightar" => (0x0000, 0x0000),
    "nleftrightarr" => (0x0000, 0x0000),
    "nleftrightarro" => (0x0000, 0x0000),
    "nleftrightarrow" => (0x0000, 0x0000),
    "nleftrightarrow;" => (0x21AE, 0x0000),
    "nleq" => (0x0000, 0x0000),
    "nleq;" => (0x2270, 0x0000),
    "nleqq" => (0x0000, 0x0000),
    "nleqq;" => (0x2266, 0x0338),
    "nleqs" => (0x0000, 0x0000),
    "nleqsl" => (0x0000, 0x0000),
    "nleqsla" => (0x0000, 0x0000),
    "nleqslan" => (0x0000, 0x0000),
    "nleqslant" => (0x0000, 0x0000),
    "nleqslant;" => (0x2A7D, 0x0338),
    "nles" => (0x0000, 0x0000),
    "nles;" => (0x2A7D, 0x0338),
    "nless" => (0x0000, 0x0000),
    "nless;" => (0x226E, 0x0000),
    "nls" => (0x0000, 0x0000),
    "nlsi" => (0x0000, 0x0000),
    "nlsim" => (0x0000, 0x0000),
    "nlsim;" => (0x2274, 0x0000),
    "nlt" => (0x0000, 0x0000),
    "nlt;" => (0x226E, 0x0000),
    "nltr" => (0x0000, 0x0000),
    "nltri" => (0x0000, 0x0000),
    "nltri;" => (0x22EA, 0x0000),
    "nltrie" => (0x0000, 0x0000),
    "nltrie;" => (0x22EC, 0x0000),
    "nm" => (0x0000, 0x0000),
    "nmi" => (0x0000, 0x0000),
    "nmid" => (0x0000, 0x0000),
    "nmid;" => (0x2224, 0x0000),
    "no" => (0x0000, 0x0000),
    "nop" => (0x0000, 0x0000),
    "nopf" => (0x0000, 0x0000),
    "nopf;" => (0x1D55F, 0x0000),
    "not" => (0x00AC, 0x0000),
    "not;" => (0x00AC, 0x0000),
    "noti" => (0x0000, 0x0000),
    "notin" => (0x0000, 0x0000),
    "notin;" => (0x2209, 0x0000),
    "notinE" => (0x0000, 0x0000),
    "notinE;" => (0x22F9, 0x0338),
    "notind" => (0x0000, 0x0000),
    "notindo" => (0x0000, 0x0000),
    "notindot" => (0x0000, 0x0000),
    "notindot;" => (0x22F5, 0x0338),
    "notinv" => (0x0000, 0x0000),
    "notinva" => (0x0000, 0x0000),
    "notinva;" => (0x2209, 0x0000),
    "notinvb" => (0x0000, 0x0000),
    "notinvb;" => (0x22F7, 0x0000),
    "notinvc" => (0x0000, 0x0000),
    "notinvc;" => (0x22F6, 0x0000),
    "notn" => (0x0000, 0x0000),
    "notni" => (0x0000, 0x0000),
    "notni;" => (0x220C, 0x0000),
    "notniv" => (0x0000, 0x0000),
    "notniva" => (0x0000, 0x0000),
    "notniva;" => (0x220C, 0x0000),
    "notnivb" => (0x0000, 0x0000),
    "notnivb;" => (0x22FE, 0x0000),
    "notnivc" => (0x0000, 0x0000),
    "notnivc;" => (0x22FD, 0x0000),
    "np" => (0x0000, 0x0000),
    "npa" => (0x0000, 0x0000),
    "npar" => (0x0000, 0x0000),
    "npar;" => (0x2226, 0x0000),
    "npara" => (0x0000, 0x0000),
    "nparal" => (0x0000, 0x0000),
    "nparall" => (0x0000, 0x0000),
    "nparalle" => (0x0000, 0x0000),
    "nparallel" => (0x0000, 0x0000),
    "nparallel;" => (0x2226, 0x0000),
    "npars" => (0x0000, 0x0000),
    "nparsl" => (0x0000, 0x0000),
    "nparsl;" => (0x2AFD, 0x20E5),
    "npart" => (0x0000, 0x0000),
    "npart;" => (0x2202, 0x0338),
    "npo" => (0x0000, 0x0000),
    "npol" => (0x0000, 0x0000),
    "npoli" => (0x0000, 0x0000),
    "npolin" => (0x0000, 0x0000),
    "npolint" => (0x0000, 0x0000),
    "npolint;" => (0x2A14, 0x0000),
    "npr" => (0x0000, 0x0000),
    "npr;" => (0x2280, 0x0000),
    "nprc" => (0x0000, 0x0000),
    "nprcu" => (0x0000, 0x0000),
    "nprcue" => (0x0000, 0x0000),
    "nprcue;" => (0x22E0, 0x0000),
    "npre" => (0x0000, 0x0000),
    "npre;" => (0x2AAF, 0x0338),
    "nprec" => (0x0000, 0x0000),
    "nprec;" => (0x2280, 0x0000),
    "nprece" => (0x0000, 0x0000),
    "npreceq" => (0x0000, 0x0000),
    "npreceq;" => (0x2AAF, 0x0338),
    "nr" => (0x0000, 0x0000),
    "nrA" => (0x0000, 0x0000),
    "nrAr" => (0x0000, 0x0000),
    "nrArr" => (0x0000, 0x0000),
    "nrArr;" => (0x21CF, 0x0000),
    "nra" => (0x0000, 0x0000),
    "nrar" => (0x0000, 0x0000),
    "nrarr" => (0x0000, 0x0000),
    "nrarr;" => (0x219B, 0x0000),
    "nrarrc" => (0x0000, 0x0000),
    "nrarrc;" => (0x2933, 0x0338),
    "nrarrw" => (0x0000, 0x0000),
    "nrarrw;" => (0x219D, 0x0338),
    "nri" => (0x0000, 0x0000),
    "nrig" => (0x0000, 0x0000),
    "nrigh" => (0x0000, 0x0000),
    "nright" => (0x0000, 0x0000),
    "nrighta" => (0x0000, 0x0000),
    "nrightar" => (0x0000, 0x0000),
    "nrightarr" => (0x0000, 0x0000),
    "nrightarro" => (0x0000, 0x0000),
    "nrightarrow" => (0x0000, 0x0000),
    "nrightarrow;" => (0x219B, 0x0000),
    "nrt" => (0x0000, 0x0000),
    "nrtr" => (0x0000, 0x0000),
    "nrtri" => (0x0000, 0x0000),
    "nrtri;" => (0x22EB, 0x0000),
    "nrtrie" => (0x0000, 0x0000),
    "nrtrie;" => (0x22ED, 0x0000),
    "ns" => (0x0000, 0x0000),
    "nsc" => (0x0000, 0x0000),
    "nsc;" => (0x2281, 0x0000),
    "nscc" => (0x0000, 0x0000),
    "nsccu" => (0x0000, 0x0000),
    "nsccue" => (0x0000, 0x0000),
    "nsccue;" => (0x22E1, 0x0000),
    "nsce" => (0x0000, 0x0000),
    "nsce;" => (0x2AB0, 0x0338),
    "nscr" => (0x0000, 0x0000),
    "nscr;" => (0x1D4C3, 0x0000),
    "nsh" => (0x0000, 0x0000),
    "nsho" => (0x0000, 0x0000),
    "nshor" => (0x0000, 0x0000),
    "nshort" => (0x0000, 0x0000),
    "nshortm" => (0x0000, 0x0000),
    "nshortmi" => (0x0000, 0x0000),
    "nshortmid" => (0x0000, 0x0000),
    "nshortmid;" => (0x2224, 0x0000),
    "nshortp" => (0x0000, 0x0000),
    "nshortpa" => (0x0000, 0x0000),
    "nshortpar" => (0x0000, 0x0000),
    "nshortpara" => (0x0000, 0x0000),
    "nshortparal" => (0x0000, 0x0000),
    "nshortparall" => (0x0000, 0x0000),
    "nshortparalle" => (0x0000, 0x0000),
    "nshortparallel" => (0x0000, 0x0000),
    "nshortparallel;" => (0x2226, 0x0000),
    "nsi" => (0x0000, 0x0000),
    "nsim" => (0x0000, 0x0000),
    "nsim;" => (0x2241, 0x0000),
    "nsime" => (0x0000, 0x0000),
    "nsime;" => (0x2244, 0x0000),
    "nsimeq" => (0x0000, 0x0000),
    "nsimeq;" => (0x2244, 0x0000),
    "nsm" => (0x0000, 0x0000),
    "nsmi" => (0x0000, 0x0000),
    "nsmid" => (0x0000, 0x0000),
    "nsmid;" => (0x2224, 0x0000),
    "nsp" => (0x0000, 0x0000),
    "nspa" => (0x0000, 0x0000),
    "nspar" => (0x0000, 0x0000),
    "nspar;" => (0x2226, 0x0000),
    "nsq" => (0x0000, 0x0000),
    "nsqs" => (0x0000, 0x0000),
    "nsqsu" => (0x0000, 0x0000),
    "nsqsub" => (0x0000, 0x0000),
    "nsqsube" => (0x0000, 0x0000),
    "nsqsube;" => (0x22E2, 0x0000),
    "nsqsup" => (0x0000, 0x0000),
    "nsqsupe" => (0x0000, 0x0000),
    "nsqsupe;" => (0x22E3, 0x0000),
    "nsu" => (0x0000, 0x0000),
    "nsub" => (0x0000, 0x0000),
    "nsub;" => (0x2284, 0x0000),
    "nsubE" => (0x0000, 0x0000),
    "nsubE;" => (0x2AC5, 0x0338),
    "nsube" => (0x0000, 0x0000),
    "nsube;" => (0x2288, 0x0000),
    "nsubs" => (0x0000, 0x0000),
    "nsubse" => (0x0000, 0x0000),
    "nsubset" => (0x0000, 0x0000),
    "nsubset;" => (0x2282, 0x20D2),
    "nsubsete" => (0x0000, 0x0000),
    "nsubseteq" => (0x0000, 0x0000),
    "nsubseteq;" => (0x2288, 0x0000),
    "nsubseteqq" => (0x0000, 0x0000),
    "nsubseteqq;" => (0x2AC5, 0x0338),
    "nsuc" => (0x0000, 0x0000),
    "nsucc" => (0x0000, 0x0000),
    "nsucc;" => (0x2281, 0x0000),
    "nsucce" => (0x0000, 0x0000),
    "nsucceq" => (0x0000, 0x0000),
    "nsucceq;" => (0x2AB0, 0x0338),
    "nsup" => (0x0000, 0x0000),
    "nsup;" => (0x2285, 0x0000),
    "nsupE" => (0x0000, 0x0000),
    "nsupE;" => (0x2AC6, 0x0338),
    "nsupe" => (0x0000, 0x0000),
    "nsupe;" => (0x2289, 0x0000),
    "nsups" => (0x0000, 0x0000),
    "nsupse" => (0x0000, 0x0000),
    "nsupset" => (0x0000, 0x0000),
    "nsupset;" => (0x2283, 0x20D2),
    "nsupsete" => (0x0000, 0x0000),
    "nsupseteq" => (0x0000, 0x0000),
    "nsupseteq;" => (0x2289, 0x0000),
    "nsupseteqq" => (0x0000, 0x0000),
    "nsupseteqq;" => (0x2AC6, 0x0338),
    "nt" => (0x0000, 0x0000),
    "ntg" => (0x0000, 0x0000),
    "ntgl" => (0x0000, 0x0000),
    "ntgl;" => (0x2279, 0x0000),
    "nti" => (0x0000, 0x0000),
    "ntil" => (0x0000, 0x0000),
    "ntild" => (0x0000, 0x0000),
    "ntilde" => (0x00F1, 0x0000),
    "ntilde;" => (0x00F1, 0x0000),
    "ntl" => (0x0000, 0x0000),
    "ntlg" => (0x0000, 0x0000),
    "ntlg;" => (0x2278, 0x0000),
    "ntr" => (0x0000, 0x0000),
    "ntri" => (0x0000, 0x0000),
    "ntria" => (0x0000, 0x0000),
    "ntrian" => (0x0000, 0x0000),
    "ntriang" => (0x0000, 0x0000),
    "ntriangl" => (0x0000, 0x0000),
    "ntriangle" => (0x0000, 0x0000),
    "ntrianglel" => (0x0000, 0x0000),
    "ntrianglele" => (0x0000, 0x0000),
    "ntrianglelef" => (0x0000, 0x0000),
    "ntriangleleft" => (0x0000, 0x0000),
    "ntriangleleft;" => (0x22EA, 0x0000),
    "ntrianglelefte" => (0x0000, 0x0000),
    "ntrianglelefteq" => (0x0000, 0x0000),
    "ntrianglelefteq;" => (0x22EC, 0x0000),
    "ntriangler" => (0x0000, 0x0000),
    "ntriangleri" => (0x0000, 0x0000),
    "ntrianglerig" => (0x0000, 0x0000),
    "ntrianglerigh" => (0x0000, 0x0000),
    "ntriangleright" => (0x0000, 0x0000),
    "ntriangleright;" => (0x22EB, 0x0000),
    "ntrianglerighte" => (0x0000, 0x0000),
    "ntrianglerighteq" => (0x0000, 0x0000),
    "ntrianglerighteq;" => (0x22ED, 0x0000),
    "nu" => (0x0000, 0x0000),
    "nu;" => (0x03BD, 0x0000),
    "num" => (0x0000, 0x0000),
    "num;" => (0x0023, 0x0000),
    "nume" => (0x0000, 0x0000),
    "numer" => (0x0000, 0x0000),
    "numero" => (0x0000, 0x0000),
    "numero;" => (0x2116, 0x0000),
    "nums" => (0x0000, 0x0000),
    "numsp" => (0x0000, 0x0000),
    "numsp;" => (0x2007, 0x0000),
    "nv" => (0x0000, 0x0000),
    "nvD" => (0x0000, 0x0000),
    "nvDa" => (0x0000, 0x0000),
    "nvDas" => (0x0000, 0x0000),
    "nvDash" => (0x0000, 0x0000),
    "nvDash;" => (0x22AD, 0x0000),
    "nvH" => (0x0000, 0x0000),
    "nvHa" => (0x0000, 0x0000),
    "nvHar" => (0x0000, 0x0000),
    "nvHarr" => (0x0000, 0x0000),
    "nvHarr;" => (0x2904, 0x0000),
    "nva" => (0x0000, 0x0000),
    "nvap" => (0x0000, 0x0000),
    "nvap;" => (0x224D, 0x20D2),
    "nvd" => (0x0000, 0x0000),
    "nvda" => (0x0000, 0x0000),
    "nvdas" => (0x0000, 0x0000),
    "nvdash" => (0x0000, 0x0000),
    "nvdash;" => (0x22AC, 0x0000),
    "nvg" => (0x0000, 0x0000),
    "nvge" => (0x0000, 0x0000),
    "nvge;" => (0x2265, 0x20D2),
    "nvgt" => (0x0000, 0x0000),
    "nvgt;" => (0x003E, 0x20D2),
    "nvi" => (0x0000, 0x0000),
    "nvin" => (0x0000, 0x0000),
    "nvinf" => (0x0000, 0x0000),
    "nvinfi" => (0x0000, 0x0000),
    "nvinfin" => (0x0000, 0x0000),
    "nvinfin;" => (0x29DE, 0x0000),
    "nvl" => (0x0000, 0x0000),
    "nvlA" => (0x0000, 0x0000),
    "nvlAr" => (0x0000, 0x0000),
    "nvlArr" => (0x0000, 0x0000),
    "nvlArr;" => (0x2902, 0x0000),
    "nvle" => (0x0000, 0x0000),
    "nvle;" => (0x2264, 0x20D2),
    "nvlt" => (0x0000, 0x0000),
    "nvlt;" => (0x003C, 0x20D2),
    "nvltr" => (0x0000, 0x0000),
    "nvltri" => (0x0000, 0x0000),
    "nvltrie" => (0x0000, 0x0000),
    "nvltrie;" => (0x22B4, 0x20D2),
    "nvr" => (0x0000, 0x0000),
    "nvrA" => (0x0000, 0x0000),
    "nvrAr" => (0x0000, 0x0000),
    "nvrArr" => (0x0000, 0x0000),
    "nvrArr;" => (0x2903, 0x0000),
    "nvrt" => (0x0000, 0x0000),
    "nvrtr" => (0x0000, 0x0000),
    "nvrtri" => (0x0000, 0x0000),
    "nvrtrie" => (0x0000, 0x0000),
    "nvrtrie;" => (0x22B5, 0x20D2),
    "nvs" => (0x0000, 0x0000),
    "nvsi" => (0x0000, 0x0000),
    "nvsim" => (0x0000, 0x0000),
    "nvsim;" => (0x223C, 0x20D2),
    "nw" => (0x0000, 0x0000),
    "nwA" => (0x0000, 0x0000),
    "nwAr" => (0x0000, 0x0000),
    "nwArr" => (0x0000, 0x0000),
    "nwArr;" => (0x21D6, 0x0000),
    "nwa" => (0x0000, 0x0000),
    "nwar" => (0x0000, 0x0000),
    "nwarh" => (0x0000, 0x0000),
    "nwarhk" => (0x0000, 0x0000),
    "nwarhk;" => (0x2923, 0x0000),
    "nwarr" => (0x0000, 0x0000),
    "nwarr;" => (0x2196, 0x0000),
    "nwarro" => (0x0000, 0x0000),
    "nwarrow" => (0x0000, 0x0000),
    "nwarrow;" => (0x2196, 0x0000),
    "nwn" => (0x0000, 0x0000),
    "nwne" => (0x0000, 0x0000),
    "nwnea" => (0x0000, 0x0000),
    "nwnear" => (0x0000, 0x0000),
    "nwnear;" => (0x2927, 0x0000),
    "o" => (0x0000, 0x0000),
    "oS" => (0x0000, 0x0000),
    "oS;" => (0x24C8, 0x0000),
    "oa" => (0x0000, 0x0000),
    "oac" => (0x0000, 0x0000),
    "oacu" => (0x0000, 0x0000),
    "oacut" => (0x0000, 0x0000),
    "oacute" => (0x00F3, 0x0000),
    "oacute;" => (0x00F3, 0x0000),
    "oas" => (0x0000, 0x0000),
    "oast" => (0x0000, 0x0000),
    "oast;" => (0x229B, 0x0000),
    "oc" => (0x0000, 0x0000),
    "oci" => (0x0000, 0x0000),
    "ocir" => (0x0000, 0x0000),
    "ocir;" => (0x229A, 0x0000),
    "ocirc" => (0x00F4, 0x0000),
    "ocirc;" => (0x00F4, 0x0000),
    "ocy" => (0x0000, 0x0000),
    "ocy;" => (0x043E, 0x0000),
    "od" => (0x0000, 0x0000),
    "oda" => (0x0000, 0x0000),
    "odas" => (0x0000, 0x0000),
    "odash" => (0x0000, 0x0000),
    "odash;" => (0x229D, 0x0000),
    "odb" => (0x0000, 0x0000),
    "odbl" => (0x0000, 0x0000),
    "odbla" => (0x0000, 0x0000),
    "odblac" => (0x0000, 0x0000),
    "odblac;" => (0x0151, 0x0000),
    "odi" => (0x0000, 0x0000),
    "odiv" => (0x0000, 0x0000),
    "odiv;" => (0x2A38, 0x0000),
    "odo" => (0x0000, 0x0000),
    "odot" => (0x0000, 0x0000),
    "odot;" => (0x2299, 0x0000),
    "ods" => (0x0000, 0x0000),
    "odso" => (0x0000, 0x0000),
    "odsol" => (0x0000, 0x0000),
    "odsold" => (0x0000, 0x0000),
    "odsold;" => (0x29BC, 0x0000),
    "oe" => (0x0000, 0x0000),
    "oel" => (0x0000, 0x0000),
    "oeli" => (0x0000, 0x0000),
    "oelig" => (0x0000, 0x0000),
    "oelig;" => (0x0153, 0x0000),
    "of" => (0x0000, 0x0000),
    "ofc" => (0x0000, 0x0000),
    "ofci" => (0x0000, 0x0000),
    "ofcir" => (0x0000, 0x0000),
    "ofcir;" => (0x29BF, 0x0000),
    "ofr" => (0x0000, 0x0000),
    "ofr;" => (0x1D52C, 0x0000),
    "og" => (0x0000, 0x0000),
    "ogo" => (0x0000, 0x0000),
    "ogon" => (0x0000, 0x0000),
    "ogon;" => (0x02DB, 0x0000),
    "ogr" => (0x0000, 0x0000),
    "ogra" => (0x0000, 0x0000),
    "ograv" => (0x0000, 0x0000),
    "ograve" => (0x00F2, 0x0000),
    "ograve;" => (0x00F2, 0x0000),
    "ogt" => (0x0000, 0x0000),
    "ogt;" => (0x29C1, 0x0000),
    "oh" => (0x0000, 0x0000),
    "ohb" => (0x0000, 0x0000),
    "ohba" => (0x0000, 0x0000),
    "ohbar" => (0x0000, 0x0000),
    "ohbar;" => (0x29B5, 0x0000),
    "ohm" => (0x0000, 0x0000),
    "ohm;" => (0x03A9, 0x0000),
    "oi" => (0x0000, 0x0000),
    "oin" => (0x0000, 0x0000),
    "oint" => (0x0000, 0x0000),
    "oint;" => (0x222E, 0x0000),
    "ol" => (0x0000, 0x0000),
    "ola" => (0x0000, 0x0000),
    "olar" => (0x0000, 0x0000),
    "olarr" => (0x0000, 0x0000),
    "olarr;" => (0x21BA, 0x0000),
    "olc" => (0x0000, 0x0000),
    "olci" => (0x0000, 0x0000),
    "olcir" => (0x0000, 0x0000),
    "olcir;" => (0x29BE, 0x0000),
    "olcr" => (0x0000, 0x0000),
    "olcro" => (0x0000, 0x0000),
    "olcros" => (0x0000, 0x0000),
    "olcross" => (0x0000, 0x0000),
    "olcross;" => (0x29BB, 0x0000),
    "oli" => (0x0000, 0x0000),
    "olin" => (0x0000, 0x0000),
    "oline" => (0x0000, 0x0000),
    "oline;" => (0x203E, 0x0000),
    "olt" => (0x0000, 0x0000),
    "olt;" => (0x29C0, 0x0000),
    "om" => (0x0000, 0x0000),
    "oma" => (0x0000, 0x0000),
    "omac" => (0x0000, 0x0000),
    "omacr" => (0x0000, 0x0000),
    "omacr;" => (0x014D, 0x0000),
    "ome" => (0x0000, 0x0000),
    "omeg" => (0x0000, 0x0000),
    "omega" => (0x0000, 0x0000),
    "omega;" => (0x03C9, 0x0000),
    "omi" => (0x0000, 0x0000),
    "omic" => (0x0000, 0x0000),
    "omicr" => (0x0000, 0x0000),
    "omicro" => (0x0000, 0x0000),
    "omicron" => (0x0000, 0x0000),
    "omicron;" => (0x03BF, 0x0000),
    "omid" => (0x0000, 0x0000),
    "omid;" => (0x29B6, 0x0000),
    "omin" => (0x0000, 0x0000),
    "ominu" => (0x0000, 0x0000),
    "ominus" => (0x0000, 0x0000),
    "ominus;" => (0x2296, 0x0000),
    "oo" => (0x0000, 0x0000),
    "oop" => (0x0000, 0x0000),
    "oopf" => (0x0000, 0x0000),
    "oopf;" => (0x1D560, 0x0000),
    "op" => (0x0000, 0x0000),
    "opa" => (0x0000, 0x0000),
    "opar" => (0x0000, 0x0000),
    "opar;" => (0x29B7, 0x0000),
    "ope" => (0x0000, 0x0000),
    "oper" => (0x0000, 0x0000),
    "operp" => (0x0000, 0x0000),
    "operp;" => (0x29B9, 0x0000),
    "opl" => (0x0000, 0x0000),
    "oplu" => (0x0000, 0x0000),
    "oplus" => (0x0000, 0x0000),
    "oplus;" => (0x2295, 0x0000),
    "or" => (0x0000, 0x0000),
    "or;" => (0x2228, 0x0000),
    "ora" => (0x0000, 0x0000),
    "orar" => (0x0000, 0x0000),
    "orarr" => (0x0000, 0x0000),
    "orarr;" => (0x21BB, 0x0000),
    "ord" => (0x0000, 0x0000),
    "ord;" => (0x2A5D, 0x0000),
    "orde" => (0x0000, 0x0000),
    "order" => (0x0000, 0x0000),
    "order;" => (0x2134, 0x0000),
    "ordero" => (0x0000, 0x0000),
    "orderof" => (0x0000, 0x0000),
    "orderof;" => (0x2134, 0x0000),
    "ordf" => (0x00AA, 0x0000),
    "ordf;" => (0x00AA, 0x0000),
    "ordm" => (0x00BA, 0x0000),
    "ordm;" => (0x00BA, 0x0000),
    "ori" => (0x0000, 0x0000),
    "orig" => (0x0000, 0x0000),
    "origo" => (0x0000, 0x0000),
    "origof" => (0x0000, 0x0000),
    "origof;" => (0x22B6, 0x0000),
    "oro" => (0x0000, 0x0000),
    "oror" => (0x0000, 0x0000),
    "oror;" => (0x2A56, 0x0000),
    "ors" => (0x0000, 0x0000),
    "orsl" => (0x0000, 0x0000),
    "orslo" => (0x0000, 0x0000),
    "orslop" => (0x0000, 0x0000),
    "orslope" => (0x0000, 0x0000),
    "orslope;" => (0x2A57, 0x0000),
    "orv" => (0x0000, 0x0000),
    "orv;" => (0x2A5B, 0x0000),
    "os" => (0x0000, 0x0000),
    "osc" => (0x0000, 0x0000),
    "oscr" => (0x0000, 0x0000),
    "oscr;" => (0x2134, 0x0000),
    "osl" => (0x0000, 0x0000),
    "osla" => (0x0000, 0x0000),
    "oslas" => (0x0000, 0x0000),
    "oslash" => (0x00F8, 0x0000),
    "oslash;" => (0x00F8, 0x0000),
    "oso" => (0x0000, 0x0000),
    "osol" => (0x0000, 0x0000),
    "osol;" => (0x2298, 0x0000),
    "ot" => (0x0000, 0x0000),
    "oti" => (0x0000, 0x0000),
    "otil" => (0x0000, 0x0000),
    "otild" => (0x0000, 0x0000),
    "otilde" => (0x00F5, 0x0000),
    "otilde;" => (0x00F5, 0x0000),
    "otim" => (0x0000, 0x0000),
    "otime" => (0x0000, 0x0000),
    "otimes" => (0x0000, 0x0000),
    "otimes;" => (0x2297, 0x0000),
    "otimesa" => (0x0000, 0x0000),
    "otimesas" => (0x0000, 0x0000),
    "otimesas;" => (0x2A36, 0x0000),
    "ou" => (0x0000, 0x0000),
    "oum" => (0x0000, 0x0000),
    "ouml" => (0x00F6, 0x0000),
    "ouml;" => (0x00F6, 0x0000),
    "ov" => (0x0000, 0x0000),
    "ovb" => (0x0000, 0x0000),
    "ovba" => (0x0000, 0x0000),
    "ovbar" => (0x0000, 0x0000),
    "ovbar;" => (0x233D, 0x0000),
    "p" => (0x0000, 0x0000),
    "pa" => (0x0000, 0x0000),
    "par" => (0x0000, 0x0000),
    "par;" => (0x2225, 0x0000),
    "para" => (0x00B6, 0x0000),
    "para;" => (0x00B6, 0x0000),
    "paral" => (0x0000, 0x0000),
    "parall" => (0x0000, 0x0000),
    "paralle" => (0x0000, 0x0000),
    "parallel" => (0x0000, 0x0000),
    "parallel;" => (0x2225, 0x0000),
    "pars" => (0x0000, 0x0000),
    "parsi" => (0x0000, 0x0000),
    "parsim" => (0x0000, 0x0000),
    "parsim;" => (0x2AF3, 0x0000),
    "parsl" => (0x0000, 0x0000),
    "parsl;" => (0x2AFD, 0x0000),
    "part" => (0x0000, 0x0000),
    "part;" => (0x2202, 0x0000),
    "pc" => (0x0000, 0x0000),
    "pcy" => (0x0000, 0x0000),
    "pcy;" => (0x043F, 0x0000),
    "pe" => (0x0000, 0x0000),
    "per" => (0x0000, 0x0000),
    "perc" => (0x0000, 0x0000),
    "percn" => (0x0000, 0x0000),
    "percnt" => (0x0000, 0x0000),
    "percnt;" => (0x0025, 0x0000),
    "peri" => (0x0000, 0x0000),
    "perio" => (0x0000, 0x0000),
    "period" => (0x0000, 0x0000),
    "period;" => (0x002E, 0x0000),
    "perm" => (0x0000, 0x0000),
    "permi" => (0x0000, 0x0000),
    "permil" => (0x0000, 0x0000),
    "permil;" => (0x2030, 0x0000),
    "perp" => (0x0000, 0x0000),
    "perp;" => (0x22A5, 0x0000),
    "pert" => (0x0000, 0x0000),
    "perte" => (0x0000, 0x0000),
    "perten" => (0x0000, 0x0000),
    "pertenk" => (0x0000, 0x0000),
    "pertenk;" => (0x2031, 0x0000),
    "pf" => (0x0000, 0x0000),
    "pfr" => (0x0000, 0x0000),
    "pfr;" => (0x1D52D, 0x0000),
    "ph" => (0x0000, 0x0000),
    "phi" => (0x0000, 0x0000),
    "phi;" => (0x03C6, 0x0000),
    "phiv" => (0x0000, 0x0000),
    "phiv;" => (0x03D5, 0x0000),
    "phm" => (0x0000, 0x0000),
    "phmm" => (0x0000, 0x0000),
    "phmma" => (0x0000, 0x0000),
    "phmmat" => (0x0000, 0x0000),
    "phmmat;" => (0x2133, 0x0000),
    "pho" => (0x0000, 0x0000),
    "phon" => (0x0000, 0x0000),
    "phone" => (0x0000, 0x0000),
    "phone;" => (0x260E, 0x0000),
    "pi" => (0x0000, 0x0000),
    "pi;" => (0x03C0, 0x0000),
    "pit" => (0x0000, 0x0000),
    "pitc" => (0x0000, 0x0000),
    "pitch" => (0x0000, 0x0000),
    "pitchf" => (0x0000, 0x0000),
    "pitchfo" => (0x0000, 0x0000),
    "pitchfor" => (0x0000, 0x0000),
    "pitchfork" => (0x0000, 0x0000),
    "pitchfork;" => (0x22D4, 0x0000),
    "piv" => (0x0000, 0x0000),
    "piv;" => (0x03D6, 0x0000),
    "pl" => (0x0000, 0x0000),
    "pla" => (0x0000, 0x0000),
    "plan" => (0x0000, 0x0000),
    "planc" => (0x0000, 0x0000),
    "planck" => (0x0000, 0x0000),
    "planck;" => (0x210F, 0x0000),
    "planckh" => (0x0000, 0x0000),
    "planckh;" => (0x210E, 0x0000),
    "plank" => (0x0000, 0x0000),
    "plankv" => (0x0000, 0x0000),
    "plankv;" => (0x210F, 0x0000),
    "plu" => (0x0000, 0x0000),
    "plus" => (0x0000, 0x0000),
    "plus;" => (0x002B, 0x0000),
    "plusa" => (0x0000, 0x0000),
    "plusac" => (0x0000, 0x0000),
    "plusaci" => (0x0000, 0x0000),
    "plusacir" => (0x0000, 0x0000),
    "plusacir;" => (0x2A23, 0x0000),
    "plusb" => (0x0000, 0x0000),
    "plusb;" => (0x229E, 0x0000),
    "plusc" => (0x0000, 0x0000),
    "plusci" => (0x0000, 0x0000),
    "pluscir" => (0x0000, 0x0000),
    "pluscir;" => (0x2A22, 0x0000),
    "plusd" => (0x0000, 0x0000),
    "plusdo" => (0x0000, 0x0000),
    "plusdo;" => (0x2214, 0x0000),
    "plusdu" => (0x0000, 0x0000),
    "plusdu;" => (0x2A25, 0x0000),
    "pluse" => (0x0000, 0x0000),
    "pluse;" => (0x2A72, 0x0000),
    "plusm" => (0x0000, 0x0000),
    "plusmn" => (0x00B1, 0x0000),
    "plusmn;" => (0x00B1, 0x0000),
    "pluss" => (0x0000, 0x0000),
    "plussi" => (0x0000, 0x0000),
    "plussim" => (0x0000, 0x0000),
    "plussim;" => (0x2A26, 0x0000),
    "plust" => (0x0000, 0x0000),
    "plustw" => (0x0000, 0x0000),
    "plustwo" => (0x0000, 0x0000),
    "plustwo;" => (0x2A27, 0x0000),
    "pm" => (0x0000, 0x0000),
    "pm;" => (0x00B1, 0x0000),
    "po" => (0x0000, 0x0000),
    "poi" => (0x0000, 0x0000),
    "poin" => (0x0000, 0x0000),
    "point" => (0x0000, 0x0000),
    "pointi" => (0x0000, 0x0000),
    "pointin" => (0x0000, 0x0000),
    "pointint" => (0x0000, 0x0000),
    "pointint;" => (0x2A15, 0x0000),
    "pop" => (0x0000, 0x0000),
    "popf" => (0x0000, 0x0000),
    "popf;" => (0x1D561, 0x0000),
    "pou" => (0x0000, 0x0000),
    "poun" => (0x0000, 0x0000),
    "pound" => (0x00A3, 0x0000),
    "pound;" => (0x00A3, 0x0000),
    "pr" => (0x0000, 0x0000),
    "pr;" => (0x227A, 0x0000),
    "prE" => (0x0000, 0x0000),
    "prE;" => (0x2AB3, 0x0000),
    "pra" => (0x0000, 0x0000),
    "prap" => (0x0000, 0x0000),
    "prap;" => (0x2AB7, 0x0000),
    "prc" => (0x0000, 0x0000),
    "prcu" => (0x0000, 0x0000),
    "prcue" => (0x0000, 0x0000),
    "prcue;" => (0x227C, 0x0000),
    "pre" => (0x0000, 0x0000),
    "pre;" => (0x2AAF, 0x0000),
    "prec" => (0x0000, 0x0000),
    "prec;" => (0x227A, 0x0000),
    "preca" => (0x0000, 0x0000),
    "precap" => (0x0000, 0x0000),
    "precapp" => (0x0000, 0x0000),
    "precappr" => (0x0000, 0x0000),
    "precappro" => (0x0000, 0x0000),
    "precapprox" => (0x0000, 0x0000),
    "precapprox;" => (0x2AB7, 0x0000),
    "precc" => (0x0000, 0x0000),
    "preccu" => (0x0000, 0x0000),
    "preccur" => (0x0000, 0x0000),
    "preccurl" => (0x0000, 0x0000),
    "preccurly" => (0x0000, 0x0000),
    "preccurlye" => (0x0000, 0x0000),
    "preccurlyeq" => (0x0000, 0x0000),
    "preccurlyeq;" => (0x227C, 0x0000),
    "prece" => (0x0000, 0x0000),
    "preceq" => (0x0000, 0x0000),
    "preceq;" => (0x2AAF, 0x0000),
    "precn" => (0x0000, 0x0000),
    "precna" => (0x0000, 0x0000),
    "precnap" => (0x0000, 0x0000),
    "precnapp" => (0x0000, 0x0000),
    "precnappr" => (0x0000, 0x0000),
    "precnappro" => (0x0000, 0x0000),
    "precnapprox" => (0x0000, 0x0000),
    "precnapprox;" => (0x2AB9, 0x0000),
    "precne" => (0x0000, 0x0000),
    "precneq" => (0x0000, 0x0000),
    "precneqq" => (0x0000, 0x0000),
    "precneqq;" => (0x2AB5, 0x0000),
    "precns" => (0x0000, 0x0000),
    "precnsi" => (0x0000, 0x0000),
    "precnsim" => (0x0000, 0x0000),
    "precnsim;" => (0x22E8, 0x0000),
    "precs" => (0x0000, 0x0000),
    "precsi" => (0x0000, 0x0000),
    "precsim" => (0x0000, 0x0000),
    "precsim;" => (0x227E, 0x0000),
    "pri" => (0x0000, 0x0000),
    "prim" => (0x0000, 0x0000),
    "prime" => (0x0000, 0x0000),
    "prime;" => (0x2032, 0x0000),
    "primes" => (0x0000, 0x0000),
    "primes;" => (0x2119, 0x0000),
    "prn" => (0x0000, 0x0000),
    "prnE" => (0x0000, 0x0000),
    "prnE;" => (0x2AB5, 0x0000),
    "prna" => (0x0000, 0x0000),
    "prnap" => (0x0000, 0x0000),
    "prnap;" => (0x2AB9, 0x0000),
    "prns" => (0x0000, 0x0000),
    "prnsi" => (0x0000, 0x0000),
    "prnsim" => (0x0000, 0x0000),
    "prnsim;" => (0x22E8, 0x0000),
    "pro" => (0x0000, 0x0000),
    "prod" => (0x0000, 0x0000),
    "prod;" => (0x220F, 0x0000),
    "prof" => (0x0000, 0x0000),
    "profa" => (0x0000, 0x0000),
    "profal" => (0x0000, 0x0000),
    "profala" => (0x0000, 0x0000),
    "profalar" => (0x0000, 0x0000),
    "profalar;" => (0x232E, 0x0000),
    "profl" => (0x0000, 0x0000),
    "profli" => (0x0000, 0x0000),
    "proflin" => (0x0000, 0x0000),
    "profline" => (0x0000, 0x0000),
    "profline;" => (0x2312, 0x0000),
    "profs" => (0x0000, 0x0000),
    "profsu" => (0x0000, 0x0000),
    "profsur" => (0x0000, 0x0000),
    "profsurf" => (0x0000, 0x0000),
    "profsurf;" => (0x2313, 0x0000),
    "prop" => (0x0000, 0x0000),
    "prop;" => (0x221D, 0x0000),
    "propt" => (0x0000, 0x0000),
    "propto" => (0x0000, 0x0000),
    "propto;" => (0x221D, 0x0000),
    "prs" => (0x0000, 0x0000),
    "prsi" => (0x0000, 0x0000),
    "prsim" => (0x0000, 0x0000),
    "prsim;" => (0x227E, 0x0000),
    "pru" => (0x0000, 0x0000),
    "prur" => (0x0000, 0x0000),
    "prure" => (0x0000, 0x0000),
    "prurel" => (0x0000, 0x0000),
    "prurel;" => (0x22B0, 0x0000),
    "ps" => (0x0000, 0x0000),
    "psc" => (0x0000, 0x0000),
    "pscr" => (0x0000, 0x0000),
    "pscr;" => (0x1D4C5, 0x0000),
    "psi" => (0x0000, 0x0000),
    "psi;" => (0x03C8, 0x0000),
    "pu" => (0x0000, 0x0000),
    "pun" => (0x0000, 0x0000),
    "punc" => (0x0000, 0x0000),
    "puncs" => (0x0000, 0x0000),
    "puncsp" => (0x0000, 0x0000),
    "puncsp;" => (0x2008, 0x0000),
    "q" => (0x0000, 0x0000),
    "qf" => (0x0000, 0x0000),
    "qfr" => (0x0000, 0x0000),
    "qfr;" => (0x1D52E, 0x0000),
    "qi" => (0x0000, 0x0000),
    "qin" => (0x0000, 0x0000),
    "qint" => (0x0000, 0x0000),
    "qint;" => (0x2A0C, 0x0000),
    "qo" => (0x0000, 0x0000),
    "qop" => (0x0000, 0x0000),
    "qopf" => (0x0000, 0x0000),
    "qopf;" => (0x1D562, 0x0000),
    "qp" => (0x0000, 0x0000),
    "qpr" => (0x0000, 0x0000),
    "qpri" => (0x0000, 0x0000),
    "qprim" => (0x0000, 0x0000),
    "qprime" => (0x0000, 0x0000),
    "qprime;" => (0x2057, 0x0000),
    "qs" => (0x0000, 0x0000),
    "qsc" => (0x0000, 0x0000),
    "qscr" => (0x0000, 0x0000),
    "qscr;" => (0x1D4C6, 0x0000),
    "qu" => (0x0000, 0x0000),
    "qua" => (0x0000, 0x0000),
    "quat" => (0x0000, 0x0000),
    "quate" => (0x0000, 0x0000),
    "quater" => (0x0000, 0x0000),
    "quatern" => (0x0000, 0x0000),
    "quaterni" => (0x0000, 0x0000),
    "quaternio" => (0x0000, 0x0000),
    "quaternion" => (0x0000, 0x0000),
    "quaternions" => (0x0000, 0x0000),
    "quaternions;" => (0x210D, 0x0000),
    "quati" => (0x0000, 0x0000),
    "quatin" => (0x0000, 0x0000),
    "quatint" => (0x0000, 0x0000),
    "quatint;" => (0x2A16, 0x0000),
    "que" => (0x0000, 0x0000),
    "ques" => (0x0000, 0x0000),
    "quest" => (0x0000, 0x0000),
    "quest;" => (0x003F, 0x0000),
    "queste" => (0x0000, 0x0000),
    "questeq" => (0x0000, 0x0000),
    "questeq;" => (0x225F, 0x0000),
    "quo" => (0x0000, 0x0000),
    "quot" => (0x0022, 0x0000),
    "quot;" => (0x0022, 0x0000),
    "r" => (0x0000, 0x0000),
    "rA" => (0x0000, 0x0000),
    "rAa" => (0x0000, 0x0000),
    "rAar" => (0x0000, 0x0000),
    "rAarr" => (0x0000, 0x0000),
    "rAarr;" => (0x21DB, 0x0000),
    "rAr" => (0x0000, 0x0000),
    "rArr" => (0x0000, 0x0000),
    "rArr;" => (0x21D2, 0x0000),
    "rAt" => (0x0000, 0x0000),
    "rAta" => (0x0000, 0x0000),
    "rAtai" => (0x0000, 0x0000),
    "rAtail" => (0x0000, 0x0000),
    "rAtail;" => (0x291C, 0x0000),
    "rB" => (0x0000, 0x0000),
    "rBa" => (0x0000, 0x0000),
    "rBar" => (0x0000, 0x0000),
    "rBarr" => (0x0000, 0x0000),
    "rBarr;" => (0x290F, 0x0000),
    "rH" => (0x0000, 0x0000),
    "rHa" => (0x0000, 0x0000),
    "rHar" => (0x0000, 0x0000),
    "rHar;" => (0x2964, 0x0000),
    "ra" => (0x0000, 0x0000),
    "rac" => (0x0000, 0x0000),
    "race" => (0x0000, 0x0000),
    "race;" => (0x223D, 0x0331),
    "racu" => (0x0000, 0x0000),
    "racut" => (0x0000, 0x0000),
    "racute" => (0x0000, 0x0000),
    "racute;" => (0x0155, 0x0000),
    "rad" => (0x0000, 0x0000),
    "radi" => (0x0000, 0x0000),
    "radic" => (0x0000, 0x0000),
    "radic;" => (0x221A, 0x0000),
    "rae" => (0x0000, 0x0000),
    "raem" => (0x0000, 0x0000),
    "raemp" => (0x0000, 0x0000),
    "raempt" => (0x0000, 0x0000),
    "raempty" => (0x0000, 0x0000),
    "raemptyv" => (0x0000, 0x0000),
    "raemptyv;" => (0x29B3, 0x0000),
    "ran" => (0x0000, 0x0000),
    "rang" => (0x0000, 0x0000),
    "rang;" => (0x27E9, 0x0000),
    "rangd" => (0x0000, 0x0000),
    "rangd;" => (0x2992, 0x0000),
    "range" => (0x0000, 0x0000),
    "range;" => (0x29A5, 0x0000),
    "rangl" => (0x0000, 0x0000),
    "rangle" => (0x0000, 0x0000),
    "rangle;" => (0x27E9, 0x0000),
    "raq" => (0x0000, 0x0000),
    "raqu" => (0x0000, 0x0000),
    "raquo" => (0x00BB, 0x0000),
    "raquo;" => (0x00BB, 0x0000),
    "rar" => (0x0000, 0x0000),
    "rarr" => (0x0000, 0x0000),
    "rarr;" => (0x2192, 0x0000),
    "rarra" => (0x0000, 0x0000),
    "rarrap" => (0x0000, 0x0000),
    "rarrap;" => (0x2975, 0x0000),
    "rarrb" => (0x0000, 0x0000),
    "rarrb;" => (0x21E5, 0x0000),
    "rarrbf" => (0x0000, 0x0000),
    "rarrbfs" => (0x0000, 0x0000),
    "rarrbfs;" => (0x2920, 0x0000),
    "rarrc" => (0x0000, 0x0000),
    "rarrc;" => (0x2933, 0x0000),
    "rarrf" => (0x0000, 0x0000),
    "rarrfs" => (0x0000, 0x0000),
    "rarrfs;" => (0x291E, 0x0000),
    "rarrh" => (0x0000, 0x0000),
    "rarrhk" => (0x0000, 0x0000),
    "rarrhk;" => (0x21AA, 0x0000),
    "rarrl" => (0x0000, 0x0000),
    "rarrlp" => (0x0000, 0x0000),
    "rarrlp;" => (0x21AC, 0x0000),
    "rarrp" => (0x0000, 0x0000),
    "rarrpl" => (0x0000, 0x0000),
    "rarrpl;" => (0x2945, 0x0000),
    "rarrs" => (0x0000, 0x0000),
    "rarrsi" => (0x0000, 0x0000),
    "rarrsim" => (0x0000, 0x0000),
    "rarrsim;" => (0x2974, 0x0000),
    "rarrt" => (0x0000, 0x0000),
    "rarrtl" => (0x0000, 0x0000),
    "rarrtl;" => (0x21A3, 0x0000),
    "rarrw" => (0x0000, 0x0000),
    "rarrw;" => (0x219D, 0x0000),
    "rat" => (0x0000, 0x0000),
    "rata" => (0x0000, 0x0000),
    "ratai" => (0x0000, 0x0000),
    "ratail" => (0x0000, 0x0000),
    "ratail;" => (0x291A, 0x0000),
    "rati" => (0x0000, 0x0000),
    "ratio" => (0x0000, 0x0000),
    "ratio;" => (0x2236, 0x0000),
    "ration" => (0x0000, 0x0000),
    "rationa" => (0x0000, 0x0000),
    "rational" => (0x0000, 0x0000),
    "rationals" => (0x0000, 0x0000),
    "rationals;" => (0x211A, 0x0000),
    "rb" => (0x0000, 0x0000),
    "rba" => (0x0000, 0x0000),
    "rbar" => (0x0000, 0x0000),
    "rbarr" => (0x0000, 0x0000),
    "rbarr;" => (0x290D, 0x0000),
    "rbb" => (0x0000, 0x0000),
    "rbbr" => (0x0000, 0x0000),
    "rbbrk" => (0x0000, 0x0000),
    "rbbrk;" => (0x2773, 0x0000),
    "rbr" => (0x0000, 0x0000),
    "rbra" => (0x0000, 0x0000),
    "rbrac" => (0x0000, 0x0000),
    "rbrace" => (0x0000, 0x0000),
    "rbrace;" => (0x007D, 0x0000),
    "rbrack" => (0x0000, 0x0000),
    "rbrack;" => (0x005D, 0x0000),
    "rbrk" => (0x0000, 0x0000),
    "rbrke" => (0x0000, 0x0000),
    "rbrke;" => (0x298C, 0x0000),
    "rbrks" => (0x0000, 0x0000),
    "rbrksl" => (0x0000, 0x0000),
    "rbrksld" => (0x0000, 0x0000),
    "rbrksld;" => (0x298E, 0x0000),
    "rbrkslu" => (0x0000, 0x0000),
    "rbrkslu;" => (0x2990, 0x0000),
    "rc" => (0x0000, 0x0000),
    "rca" => (0x0000, 0x0000),
    "rcar" => (0x0000, 0x0000),
    "rcaro" => (0x0000, 0x0000),
    "rcaron" => (0x0000, 0x0000),
    "rcaron;" => (0x0159, 0x0000),
    "rce" => (0x0000, 0x0000),
    "rced" => (0x0000, 0x0000),
    "rcedi" => (0x0000, 0x0000),
    "rcedil" => (0x0000, 0x0000),
    "rcedil;" => (0x0157, 0x0000),
    "rcei" => (0x0000, 0x0000),
    "rceil" => (0x0000, 0x0000),
    "rceil;" => (0x2309, 0x0000),
    "rcu" => (0x0000, 0x0000),
    "rcub" => (0x0000, 0x0000),
    "rcub;" => (0x007D, 0x0000),
    "rcy" => (0x0000, 0x0000),
    "rcy;" => (0x0440, 0x0000),
    "rd" => (0x0000, 0x0000),
    "rdc" => (0x0000, 0x0000),
    "rdca" => (0x0000, 0x0000),
    "rdca;" => (0x2937, 0x0000),
    "rdl" => (0x0000, 0x0000),
    "rdld" => (0x0000, 0x0000),
    "rdldh" => (0x0000, 0x0000),
    "rdldha" => (0x0000, 0x0000),
    "rdldhar" => (0x0000, 0x0000),
    "rdldhar;" => (0x2969, 0x0000),
    "rdq" => (0x0000, 0x0000),
    "rdqu" => (0x0000, 0x0000),
    "rdquo" => (0x0000, 0x0000),
    "rdquo;" => (0x201D, 0x0000),
    "rdquor" => (0x0000, 0x0000),
    "rdquor;" => (0x201D, 0x0000),
    "rds" => (0x0000, 0x0000),
    "rdsh" => (0x0000, 0x0000),
    "rdsh;" => (0x21B3, 0x0000),
    "re" => (0x0000, 0x0000),
    "rea" => (0x0000, 0x0000),
    "real" => (0x0000, 0x0000),
    "real;" => (0x211C, 0x0000),
    "reali" => (0x0000, 0x0000),
    "realin" => (0x0000, 0x0000),
    "realine" => (0x0000, 0x0000),
    "realine;" => (0x211B, 0x0000),
    "realp" => (0x0000, 0x0000),
    "realpa" => (0x0000, 0x0000),
    "realpar" => (0x0000, 0x0000),
    "realpart" => (0x0000, 0x0000),
    "realpart;" => (0x211C, 0x0000),
    "reals" => (0x0000, 0x0000),
    "reals;" => (0x211D, 0x0000),
    "rec" => (0x0000, 0x0000),
    "rect" => (0x0000, 0x0000),
    "rect;" => (0x25AD, 0x0000),
    "reg" => (0x00AE, 0x0000),
    "reg;" => (0x00AE, 0x0000),
    "rf" => (0x0000, 0x0000),
    "rfi" => (0x0000, 0x0000),
    "rfis" => (0x0000, 0x0000),
    "rfish" => (0x0000, 0x0000),
    "rfisht" => (0x0000, 0x0000),
    "rfisht;" => (0x297D, 0x0000),
    "rfl" => (0x0000, 0x0000),
    "rflo" => (0x0000, 0x0000),
    "rfloo" => (0x0000, 0x0000),
    "rfloor" => (0x0000, 0x0000),
    "rfloor;" => (0x230B, 0x0000),
    "rfr" => (0x0000, 0x0000),
    "rfr;" => (0x1D52F, 0x0000),
    "rh" => (0x0000, 0x0000),
    "rha" => (0x0000, 0x0000),
    "rhar" => (0x0000, 0x0000),
    "rhard" => (0x0000, 0x0000),
    "rhard;" => (0x21C1, 0x0000),
    "rharu" => (0x0000, 0x0000),
    "rharu;" => (0x21C0, 0x0000),
    "rharul" => (0x0000, 0x0000),
    "rharul;" => (0x296C, 0x0000),
    "rho" => (0x0000, 0x0000),
    "rho;" => (0x03C1, 0x0000),
    "rhov" => (0x0000, 0x0000),
    "rhov;" => (0x03F1, 0x0000),
    "ri" => (0x0000, 0x0000),
    "rig" => (0x0000, 0x0000),
    "righ" => (0x0000, 0x0000),
    "right" => (0x0000, 0x0000),
    "righta" => (0x0000, 0x0000),
    "rightar" => (0x0000, 0x0000),
    "rightarr" => (0x0000, 0x0000),
    "rightarro" => (0x0000, 0x0000),
    "rightarrow" => (0x0000, 0x0000),
    "rightarrow;" => (0x2192, 0x0000),
    "rightarrowt" => (0x0000, 0x0000),
    "rightarrowta" => (0x0000, 0x0000),
    "rightarrowtai" => (0x0000, 0x0000),
    "rightarrowtail" => (0x0000, 0x0000),
    "rightarrowtail;" => (0x21A3, 0x0000),
    "righth" => (0x0000, 0x0000),
    "rightha" => (0x0000, 0x0000),
    "righthar" => (0x0000, 0x0000),
    "rightharp" => (0x0000, 0x0000),
    "rightharpo" => (0x0000, 0x0000),
    "rightharpoo" => (0x0000, 0x0000),
    "rightharpoon" => (0x0000, 0x0000),
    "rightharpoond" => (0x0000, 0x0000),
    "rightharpoondo" => (0x0000, 0x0000),
    "rightharpoondow" => (0x0000, 0x0000),
    "rightharpoondown" => (0x0000, 0x0000),
    "rightharpoondown;" => (0x21C1, 0x0000),
    "rightharpoonu" => (0x0000, 0x0000),
    "rightharpoonup" => (0x0000, 0x0000),
    "rightharpoonup;" => (0x21C0, 0x0000),
    "rightl" => (0x0000, 0x0000),
    "rightle" => (0x0000, 0x0000),
    "rightlef" => (0x0000, 0x0000),
    "rightleft" => (0x0000, 0x0000),
    "rightlefta" => (0x0000, 0x0000),
    "rightleftar" => (0x0000, 0x0000),
    "rightleftarr" => (0x0000, 0x0000),
    "rightleftarro" => (0x0000, 0x0000),
    "rightleftarrow" => (0x0000, 0x0000),
    "rightleftarrows" => (0x0000, 0x0000),
    "rightleftarrows;" => (0x21C4, 0x0000),
    "rightlefth" => (0x0000, 0x0000),
    "rightleftha" => (0x0000, 0x0000),
    "rightlefthar" => (0x0000, 0x0000),
    "rightleftharp" => (0x0000, 0x0000),
    "rightleftharpo" => (0x0000, 0x0000),
    "rightleftharpoo" => (0x0000, 0x0000),
    "rightleftharpoon" => (0x0000, 0x0000),
    "rightleftharpoons" => (0x0000, 0x0000),
    "rightleftharpoons;" => (0x21CC, 0x0000),
    "rightr" => (0x0000, 0x0000),
    "rightri" => (0x0000, 0x0000),
    "rightrig" => (0x0000, 0x0000),
    "rightrigh" => (0x0000, 0x0000),
    "rightright" => (0x0000, 0x0000),
    "rightrighta" => (0x0000, 0x0000),
    "rightrightar" => (0x0000, 0x0000),
    "rightrightarr" => (0x0000, 0x0000),
    "rightrightarro" => (0x0000, 0x0000),
    "rightrightarrow" => (0x0000, 0x0000),
    "rightrightarrows" => (0x0000, 0x0000),
    "rightrightarrows;" => (0x21C9, 0x0000),
    "rights" => (0x0000, 0x0000),
    "rightsq" => (0x0000, 0x0000),
    "rightsqu" => (0x0000, 0x0000),
    "rightsqui" => (0x0000, 0x0000),
    "rightsquig" => (0x0000, 0x0000),
    "rightsquiga" => (0x0000, 0x0000),
    "rightsquigar" => (0x0000, 0x0000),
    "rightsquigarr" => (0x0000, 0x0000),
    "rightsquigarro" => (0x0000, 0x0000),
    "rightsquigarrow" => (0x0000, 0x0000),
    "rightsquigarrow;" => (0x219D, 0x0000),
    "rightt" => (0x0000, 0x0000),
    "rightth" => (0x0000, 0x0000),
    "rightthr" => (0x0000, 0x0000),
    "rightthre" => (0x0000, 0x0000),
    "rightthree" => (0x0000, 0x0000),
    "rightthreet" => (0x0000, 0x0000),
    "rightthreeti" => (0x0000, 0x0000),
    "rightthreetim" => (0x0000, 0x0000),
    "rightthreetime" => (0x0000, 0x0000),
    "rightthreetimes" => (0x0000, 0x0000),
    "rightthreetimes;" => (0x22CC, 0x0000),
    "rin" => (0x0000, 0x0000),
    "ring" => (0x0000, 0x0000),
    "ring;" => (0x02DA, 0x0000),
    "ris" => (0x0000, 0x0000),
    "risi" => (0x0000, 0x0000),
    "risin" => (0x0000, 0x0000),
    "rising" => (0x0000, 0x0000),
    "risingd" => (0x0000, 0x0000),
    "risingdo" => (0x0000, 0x0000),
    "risingdot" => (0x0000, 0x0000),
    "risingdots" => (0x0000, 0x0000),
    "risingdotse" => (0x0000, 0x0000),
    "risingdotseq" => (0x0000, 0x0000),
    "risingdotseq;" => (0x2253, 0x0000),
    "rl" => (0x0000, 0x0000),
    "rla" => (0x0000, 0x0000),
    "rlar" => (0x0000, 0x0000),
    "rlarr" => (0x0000, 0x0000),
    "rlarr;" => (0x21C4, 0x0000),
    "rlh" => (0x0000, 0x0000),
    "rlha" => (0x0000, 0x0000),
    "rlhar" => (0x0000, 0x0000),
    "rlhar;" => (0x21CC, 0x0000),
    "rlm" => (0x0000, 0x0000),
    "rlm;" => (0x200F, 0x0000),
    "rm" => (0x0000, 0x0000),
    "rmo" => (0x0000, 0x0000),
    "rmou" => (0x0000, 0x0000),
    "rmous" => (0x0000, 0x0000),
    "rmoust" => (0x0000, 0x0000),
    "rmoust;" => (0x23B1, 0x0000),
    "rmousta" => (0x0000, 0x0000),
    "rmoustac" => (0x0000, 0x0000),
    "rmoustach" => (0x0000, 0x0000),
    "rmoustache" => (0x0000, 0x0000),
    "rmoustache;" => (0x23B1, 0x0000),
    "rn" => (0x0000, 0x0000),
    "rnm" => (0x0000, 0x0000),
    "rnmi" => (0x0000, 0x0000),
    "rnmid" => (0x0000, 0x0000),
    "rnmid;" => (0x2AEE, 0x0000),
    "ro" => (0x0000, 0x0000),
    "roa" => (0x0000, 0x0000),
    "roan" => (0x0000, 0x0000),
    "roang" => (0x0000, 0x0000),
    "roang;" => (0x27ED, 0x0000),
    "roar" => (0x0000, 0x0000),
    "roarr" => (0x0000, 0x0000),
    "roarr;" => (0x21FE, 0x0000),
    "rob" => (0x0000, 0x0000),
    "robr" => (0x0000, 0x0000),
    "robrk" => (0x0000, 0x0000),
    "robrk;" => (0x27E7, 0x0000),
    "rop" => (0x0000, 0x0000),
    "ropa" => (0x0000, 0x0000),
    "ropar" => (0x0000, 0x0000),
    "ropar;" => (0x2986, 0x0000),
    "ropf" => (0x0000, 0x0000),
    "ropf;" => (0x1D563, 0x0000),
    "ropl" => (0x0000, 0x0000),
    "roplu" => (0x0000, 0x0000),
    "roplus" => (0x0000, 0x0000),
    "roplus;" => (0x2A2E, 0x0000),
    "rot" => (0x0000, 0x0000),
    "roti" => (0x0000, 0x0000),
    "rotim" => (0x0000, 0x0000),
    "rotime" => (0x0000, 0x0000),
    "rotimes" => (0x0000, 0x0000),
    "rotimes;" => (0x2A35, 0x0000),
    "rp" => (0x0000, 0x0000),
    "rpa" => (0x0000, 0x0000),
    "rpar" => (0x0000, 0x0000),
    "rpar;" => (0x0029, 0x0000),
    "rparg" => (0x0000, 0x0000),
    "rpargt" => (0x0000, 0x0000),
    "rpargt;" => (0x2994, 0x0000),
    "rpp" => (0x0000, 0x0000),
    "rppo" => (0x0000, 0x0000),
    "rppol" => (0x0000, 0x0000),
    "rppoli" => (0x0000, 0x0000),
    "rppolin" => (0x0000, 0x0000),
    "rppolint" => (0x0000, 0x0000),
    "rppolint;" => (0x2A12, 0x0000),
    "rr" => (0x0000, 0x0000),
    "rra" => (0x0000, 0x0000),
    "rrar" => (0x0000, 0x0000),
    "rrarr" => (0x0000, 0x0000),
    "rrarr;" => (0x21C9, 0x0000),
    "rs" => (0x0000, 0x0000),
    "rsa" => (0x0000, 0x0000),
    "rsaq" => (0x0000, 0x0000),
    "rsaqu" => (0x0000, 0x0000),
    "rsaquo" => (0x0000, 0x0000),
    "rsaquo;" => (0x203A, 0x0000),
    "rsc" => (0x0000, 0x0000),
    "rscr" => (0x0000, 0x0000),
    "rscr;" => (0x1D4C7, 0x0000),
    "rsh" => (0x0000, 0x0000),
    "rsh;" => (0x21B1, 0x0000),
    "rsq" => (0x0000, 0x0000),
    "rsqb" => (0x0000, 0x0000),
    "rsqb;" => (0x005D, 0x0000),
    "rsqu" => (0x0000, 0x0000),
    "rsquo" => (0x0000, 0x0000),
    "rsquo;" => (0x2019, 0x0000),
    "rsquor" => (0x0000, 0x0000),
    "rsquor;" => (0x2019, 0x0000),
    "rt" => (0x0000, 0x0000),
    "rth" => (0x0000, 0x0000),
    "rthr" => (0x0000, 0x0000),
    "rthre" => (0x0000, 0x0000),
    "rthree" => (0x0000, 0x0000),
    "rthree;" => (0x22CC, 0x0000),
    "rti" => (0x0000, 0x0000),
    "rtim" => (0x0000, 0x0000),
    "rtime" => (0x0000, 0x0000),
    "rtimes" => (0x0000, 0x0000),
    "rtimes;" => (0x22CA, 0x0000),
    "rtr" => (0x0000, 0x0000),
    "rtri" => (0x0000, 0x0000),
    "rtri;" => (0x25B9, 0x0000),
    "rtrie" => (0x0000, 0x0000),
    "rtrie;" => (0x22B5, 0x0000),
    "rtrif" => (0x0000, 0x0000),
    "rtrif;" => (0x25B8, 0x0000),
    "rtril" => (0x0000, 0x0000),
    "rtrilt" => (0x0000, 0x0000),
    "rtriltr" => (0x0000, 0x0000),
    "rtriltri" => (0x0000, 0x0000),
    "rtriltri;" => (0x29CE, 0x0000),
    "ru" => (0x0000, 0x0000),
    "rul" => (0x0000, 0x0000),
    "rulu" => (0x0000, 0x0000),
    "ruluh" => (0x0000, 0x0000),
    "ruluha" => (0x0000, 0x0000),
    "ruluhar" => (0x0000, 0x0000),
    "ruluhar;" => (0x2968, 0x0000),
    "rx" => (0x0000, 0x0000),
    "rx;" => (0x211E, 0x0000),
    "s" => (0x0000, 0x0000),
    "sa" => (0x0000, 0x0000),
    "sac" => (0x0000, 0x0000),
    "sacu" => (0x0000, 0x0000),
    "sacut" => (0x0000, 0x0000),
    "sacute" => (0x0000, 0x0000),
    "sacute;" => (0x015B, 0x0000),
    "sb" => (0x0000, 0x0000),
    "sbq" => (0x0000, 0x0000),
    "sbqu" => (0x0000, 0x0000),
    "sbquo" => (0x0000, 0x0000),
    "sbquo;" => (0x201A, 0x0000),
    "sc" => (0x0000, 0x0000),
    "sc;" => (0x227B, 0x0000),
    "scE" => (0x0000, 0x0000),
    "scE;" => (0x2AB4, 0x0000),
    "sca" => (0x0000, 0x0000),
    "scap" => (0x0000, 0x0000),
    "scap;" => (0x2AB8, 0x0000),
    "scar" => (0x0000, 0x0000),
    "scaro" => (0x0000, 0x0000),
    "scaron" => (0x0000, 0x0000),
    "scaron;" => (0x0161, 0x0000),
    "scc" => (0x0000, 0x0000),
    "sccu" => (0x0000, 0x0000),
    "sccue" => (0x0000, 0x0000),
    "sccue;" => (0x227D, 0x0000),
    "sce" => (0x0000, 0x0000),
    "sce;" => (0x2AB0, 0x0000),
    "sced" => (0x0000, 0x0000),
    "scedi" => (0x0000, 0x0000),
    "scedil" => (0x0000, 0x0000),
    "scedil;" => (0x015F, 0x0000),
    "sci" => (0x0000, 0x0000),
    "scir" => (0x0000, 0x0000),
    "scirc" => (0x0000, 0x0000),
    "scirc;" => (0x015D, 0x0000),
    "scn" => (0x0000, 0x0000),
    "scnE" => (0x0000, 0x0000),
    "scnE;" => (0x2AB6, 0x0000),
    "scna" => (0x0000, 0x0000),
    "scnap" => (0x0000, 0x0000),
    "scnap;" => (0x2ABA, 0x0000),
    "scns" => (0x0000, 0x0000),
    "scnsi" => (0x0000, 0x0000),
    "scnsim" => (0x0000, 0x0000),
    "scnsim;" => (0x22E9, 0x0000),
    "scp" => (0x0000, 0x0000),
    "scpo" => (0x0000, 0x0000),
    "scpol" => (0x0000, 0x0000),
    "scpoli" => (0x0000, 0x0000),
    "scpolin" => (0x0000, 0x0000),
    "scpolint" => (0x0000, 0x0000),
    "scpolint;" => (0x2A13, 0x0000),
    "scs" => (0x0000, 0x0000),
    "scsi" => (0x0000, 0x0000),
    "scsim" => (0x0000, 0x0000),
    "scsim;" => (0x227F, 0x0000),
    "scy" => (0x0000, 0x0000),
    "scy;" => (0x0441, 0x0000),
    "sd" => (0x0000, 0x0000),
    "sdo" => (0x0000, 0x0000),
    "sdot" => (0x0000, 0x0000),
    "sdot;" => (0x22C5, 0x0000),
    "sdotb" => (0x0000, 0x0000),
    "sdotb;" => (0x22A1, 0x0000),
    "sdote" => (0x0000, 0x0000),
    "sdote;" => (0x2A66, 0x0000),
    "se" => (0x0000, 0x0000),
    "seA" => (0x0000, 0x0000),
    "seAr" => (0x0000, 0x0000),
    "seArr" => (0x0000, 0x0000),
    "seArr;" => (0x21D8, 0x0000),
    "sea" => (0x0000, 0x0000),
    "sear" => (0x0000, 0x0000),
    "searh" => (0x0000, 0x0000),
    "searhk" => (0x0000, 0x0000),
    "searhk;" => (0x2925, 0x0000),
    "searr" => (0x0000, 0x0000),
    "searr;" => (0x2198, 0x0000),
    "searro" => (0x0000, 0x0000),
    "searrow" => (0x0000, 0x0000),
    "searrow;" => (0x2198, 0x0000),
    "sec" => (0x0000, 0x0000),
    "sect" => (0x00A7, 0x0000),
    "sect;" => (0x00A7, 0x0000),
    "sem" => (0x0000, 0x0000),
    "semi" => (0x0000, 0x0000),
    "semi;" => (0x003B, 0x0000),
    "ses" => (0x0000, 0x0000),
    "sesw" => (0x0000, 0x0000),
    "seswa" => (0x0000, 0x0000),
    "seswar" => (0x0000, 0x0000),
    "seswar;" => (0x2929, 0x0000),
    "set" => (0x0000, 0x0000),
    "setm" => (0x0000, 0x0000),
    "setmi" => (0x0000, 0x0000),
    "setmin" => (0x0000, 0x0000),
    "setminu" => (0x0000, 0x0000),
    "setminus" => (0x0000, 0x0000),
    "setminus;" => (0x2216, 0x0000),
    "setmn" => (0x0000, 0x0000),
    "setmn;" => (0x2216, 0x0000),
    "sex" => (0x0000, 0x0000),
    "sext" => (0x0000, 0x0000),
    "sext;" => (0x2736, 0x0000),
    "sf" => (0x0000, 0x0000),
    "sfr" => (0x0000, 0x0000),
    "sfr;" => (0x1D530, 0x0000),
    "sfro" => (0x0000, 0x0000),
    "sfrow" => (0x0000, 0x0000),
    "sfrown" => (0x0000, 0x0000),
    "sfrown;" => (0x2322, 0x0000),
    "sh" => (0x0000, 0x0000),
    "sha" => (0x0000, 0x0000),
    "shar" => (0x0000, 0x0000),
    "sharp" => (0x0000, 0x0000),
    "sharp;" => (0x266F, 0x0000),
    "shc" => (0x0000, 0x0000),
    "shch" => (0x0000, 0x0000),
    "shchc" => (0x0000, 0x0000),
    "shchcy" => (0x0000, 0x0000),
    "shchcy;" => (0x0449, 0x0000),
    "shcy" => (0x0000, 0x0000),
    "shcy;" => (0x0448, 0x0000),
    "sho" => (0x0000, 0x0000),
    "shor" => (0x0000, 0x0000),
    "short" => (0x0000, 0x0000),
    "shortm" => (0x0000, 0x0000),
    "shortmi" => (0x0000, 0x0000),
    "shortmid" => (0x0000, 0x0000),
    "shortmid;" => (0x2223, 0x0000),
    "shortp" => (0x0000, 0x0000),
    "shortpa" => (0x0000, 0x0000),
    "shortpar" => (0x0000, 0x0000),
    "shortpara" => (0x0000, 0x0000),
    "shortparal" => (0x0000, 0x0000),
    "shortparall" => (0x0000, 0x0000),
    "shortparalle" => (0x0000, 0x0000),
    "shortparallel" => (0x0000, 0x0000),
    "shortparallel;" => (0x2225, 0x0000),
    "shy" => (0x00AD, 0x0000),
    "shy;" => (0x00AD, 0x0000),
    "si" => (0x0000, 0x0000),
    "sig" => (0x0000, 0x0000),
    "sigm" => (0x0000, 0x0000),
    "sigma" => (0x0000, 0x0000),
    "sigma;" => (0x03C3, 0x0000),
    "sigmaf" => (0x0000, 0x0000),
    "sigmaf;" => (0x03C2, 0x0000),
    "sigmav" => (0x0000, 0x0000),
    "sigmav;" => (0x03C2, 0x0000),
    "sim" => (0x0000, 0x0000),
    "sim;" => (0x223C, 0x0000),
    "simd" => (0x0000, 0x0000),
    "simdo" => (0x0000, 0x0000),
    "simdot" => (0x0000, 0x0000),
    "simdot;" => (0x2A6A, 0x0000),
    "sime" => (0x0000, 0x0000),
    "sime;" => (0x2243, 0x0000),
    "simeq" => (0x0000, 0x0000),
    "simeq;" => (0x2243, 0x0000),
    "simg" => (0x0000, 0x0000),
    "simg;" => (0x2A9E, 0x0000),
    "simgE" => (0x0000, 0x0000),
    "simgE;" => (0x2AA0, 0x0000),
    "siml" => (0x0000, 0x0000),
    "siml;" => (0x2A9D, 0x0000),
    "simlE" => (0x0000, 0x0000),
    "simlE;" => (0x2A9F, 0x0000),
    "simn" => (0x0000, 0x0000),
    "simne" => (0x0000, 0x0000),
    "simne;" => (0x2246, 0x0000),
    "simp" => (0x0000, 0x0000),
    "simpl" => (0x0000, 0x0000),
    "simplu" => (0x0000, 0x0000),
    "simplus" => (0x0000, 0x0000),
    "simplus;" => (0x2A24, 0x0000),
    "simr" => (0x0000, 0x0000),
    "simra" => (0x0000, 0x0000),
    "simrar" => (0x0000, 0x0000),
    "simrarr" => (0x0000, 0x0000),
    "simrarr;" => (0x2972, 0x0000),
    "sl" => (0x0000, 0x0000),
    "sla" => (0x0000, 0x0000),
    "slar" => (0x0000, 0x0000),
    "slarr" => (0x0000, 0x0000),
    "slarr;" => (0x2190, 0x0000),
    "sm" => (0x0000, 0x0000),
    "sma" => (0x0000, 0x0000),
    "smal" => (0x0000, 0x0000),
    "small" => (0x0000, 0x0000),
    "smalls" => (0x0000, 0x0000),
    "smallse" => (0x0000, 0x0000),
    "smallset" => (0x0000, 0x0000),
    "smallsetm" => (0x0000, 0x0000),
    "smallsetmi" => (0x0000, 0x0000),
    "smallsetmin" => (0x0000, 0x0000),
    "smallsetminu" => (0x0000, 0x0000),
    "smallsetminus" => (0x0000, 0x0000),
    "smallsetminus;" => (0x2216, 0x0000),
    "smas" => (0x0000, 0x0000),
    "smash" => (0x0000, 0x0000),
    "smashp" => (0x0000, 0x0000),
    "smashp;" => (0x2A33, 0x0000),
    "sme" => (0x0000, 0x0000),
    "smep" => (0x0000, 0x0000),
    "smepa" => (0x0000, 0x0000),
    "smepar" => (0x0000, 0x0000),
    "smepars" => (0x0000, 0x0000),
    "smeparsl" => (0x0000, 0x0000),
    "smeparsl;" => (0x29E4, 0x0000),
    "smi" => (0x0000, 0x0000),
    "smid" => (0x0000, 0x0000),
    "smid;" => (0x2223, 0x0000),
    "smil" => (0x0000, 0x0000),
    "smile" => (0x0000, 0x0000),
    "smile;" => (0x2323, 0x0000),
    "smt" => (0x0000, 0x0000),
    "smt;" => (0x2AAA, 0x0000),
    "smte" => (0x0000, 0x0000),
    "smte;" => (0x2AAC, 0x0000),
    "smtes" => (0x0000, 0x0000),
    "smtes;" => (0x2AAC, 0xFE00),
    "so" => (0x0000, 0x0000),
    "sof" => (0x0000, 0x0000),
    "soft" => (0x0000, 0x0000),
    "softc" => (0x0000, 0x0000),
    "softcy" => (0x0000, 0x0000),
    "softcy;" => (0x044C, 0x0000),
    "sol" => (0x0000, 0x0000),
    "sol;" => (0x002F, 0x0000),
    "solb" => (0x0000, 0x0000),
    "solb;" => (0x29C4, 0x0000),
    "solba" => (0x0000, 0x0000),
    "solbar" => (0x0000, 0x0000),
    "solbar;" => (0x233F, 0x0000),
    "sop" => (0x0000, 0x0000),
    "sopf" => (0x0000, 0x0000),
    "sopf;" => (0x1D564, 0x0000),
    "sp" => (0x0000, 0x0000),
    "spa" => (0x0000, 0x0000),
    "spad" => (0x0000, 0x0000),
    "spade" => (0x0000, 0x0000),
    "spades" => (0x0000, 0x0000),
    "spades;" => (0x2660, 0x0000),
    "spadesu" => (0x0000, 0x0000),
    "spadesui" => (0x0000, 0x0000),
    "spadesuit" => (0x0000, 0x0000),
    "spadesuit;" => (0x2660, 0x0000),
    "spar" => (0x0000, 0x0000),
    "spar;" => (0x2225, 0x0000),
    "sq" => (0x0000, 0x0000),
    "sqc" => (0x0000, 0x0000),
    "sqca" => (0x0000, 0x0000),
    "sqcap" => (0x0000, 0x0000),
    "sqcap;" => (0x2293, 0x0000),
    "sqcaps" => (0x0000, 0x0000),
    "sqcaps;" => (0x2293, 0xFE00),
    "sqcu" => (0x0000, 0x0000),
    "sqcup" => (0x0000, 0x0000),
    "sqcup;" => (0x2294, 0x0000),
    "sqcups" => (0x0000, 0x0000),
    "sqcups;" => (0x2294, 0xFE00),
    "sqs" => (0x0000, 0x0000),
    "sqsu" => (0x0000, 0x0000),
    "sqsub" => (0x0000, 0x0000),
    "sqsub;" => (0x228F, 0x0000),
    "sqsube" => (0x0000, 0x0000),
    "sqsube;" => (0x2291, 0x0000),
    "sqsubs" => (0x0000, 0x0000),
    "sqsubse" => (0x0000, 0x0000),
    "sqsubset" => (0x0000, 0x0000),
    "sqsubset;" => (0x228F, 0x0000),
    "sqsubsete" => (0x0000, 0x0000),
    "sqsubseteq" => (0x0000, 0x0000),
    "sqsubseteq;" => (0x2291, 0x0000),
    "sqsup" => (0x0000, 0x0000),
    "sqsup;" => (0x2290, 0x0000),
    "sqsupe" => (0x0000, 0x0000),
    "sqsupe;" => (0x2292, 0x0000),
    "sqsups" => (0x0000, 0x0000),
    "sqsupse" => (0x0000, 0x0000),
    "sqsupset" => (0x0000, 0x0000),
    "sqsupset;" => (0x2290, 0x0000),
    "sqsupsete" => (0x0000, 0x0000),
    "sqsupseteq" => (0x0000, 0x0000),
    "sqsupseteq;" => (0x2292, 0x0000),
    "squ" => (0x0000, 0x0000),
    "squ;" => (0x25A1, 0x0000),
    "squa" => (0x0000, 0x0000),
    "squar" => (0x0000, 0x0000),
    "square" => (0x0000, 0x0000),
    "square;" => (0x25A1, 0x0000),
    "squarf" => (0x0000, 0x0000),
    "squarf;" => (0x25AA, 0x0000),
    "squf" => (0x0000, 0x0000),
    "squf;" => (0x25AA, 0x0000),
    "sr" => (0x0000, 0x0000),
    "sra" => (0x0000, 0x0000),
    "srar" => (0x0000, 0x0000),
    "srarr" => (0x0000, 0x0000),
    "srarr;" => (0x2192, 0x0000),
    "ss" => (0x0000, 0x0000),
    "ssc" => (0x0000, 0x0000),
    "sscr" => (0x0000, 0x0000),
    "sscr;" => (0x1D4C8, 0x0000),
    "sse" => (0x0000, 0x0000),
    "sset" => (0x0000, 0x0000),
    "ssetm" => (0x0000, 0x0000),
    "ssetmn" => (0x0000, 0x0000),
    "ssetmn;" => (0x2216, 0x0000),
    "ssm" => (0x0000, 0x0000),
    "ssmi" => (0x0000, 0x0000),
    "ssmil" => (0x0000, 0x0000),
    "ssmile" => (0x0000, 0x0000),
    "ssmile;" => (0x2323, 0x0000),
    "sst" => (0x0000, 0x0000),
    "ssta" => (0x0000, 0x0000),
    "sstar" => (0x0000, 0x0000),
    "sstarf" => (0x0000, 0x0000),
    "sstarf;" => (0x22C6, 0x0000),
    "st" => (0x0000, 0x0000),
    "sta" => (0x0000, 0x0000),
    "star" => (0x0000, 0x0000),
    "star;" => (0x2606, 0x0000),
    "starf" => (0x0000, 0x0000),
    "starf;" => (0x2605, 0x0000),
    "str" => (0x0000, 0x0000),
    "stra" => (0x0000, 0x0000),
    "strai" => (0x0000, 0x0000),
    "straig" => (0x0000, 0x0000),
    "straigh" => (0x0000, 0x0000),
    "straight" => (0x0000, 0x0000),
    "straighte" => (0x0000, 0x0000),
    "straightep" => (0x0000, 0x0000),
    "straighteps" => (0x0000, 0x0000),
    "straightepsi" => (0x0000, 0x0000),
    "straightepsil" => (0x0000, 0x0000),
    "straightepsilo" => (0x0000, 0x0000),
    "straightepsilon" => (0x0000, 0x0000),
    "straightepsilon;" => (0x03F5, 0x0000),
    "straightp" => (0x0000, 0x0000),
    "straightph" => (0x0000, 0x0000),
    "straightphi" => (0x0000, 0x0000),
    "straightphi;" => (0x03D5, 0x0000),
    "strn" => (0x0000, 0x0000),
    "strns" => (0x0000, 0x0000),
    "strns;" => (0x00AF, 0x0000),
    "su" => (0x0000, 0x0000),
    "sub" => (0x0000, 0x0000),
    "sub;" => (0x2282, 0x0000),
    "subE" => (0x0000, 0x0000),
    "subE;" => (0x2AC5, 0x0000),
    "subd" => (0x0000, 0x0000),
    "subdo" => (0x0000, 0x0000),
    "subdot" => (0x0000, 0x0000),
    "subdot;" => (0x2ABD, 0x0000),
    "sube" => (0x0000, 0x0000),
    "sube;" => (0x2286, 0x0000),
    "subed" => (0x0000, 0x0000),
    "subedo" => (0x0000, 0x0000),
    "subedot" => (0x0000, 0x0000),
    "subedot;" => (0x2AC3, 0x0000),
    "subm" => (0x0000, 0x0000),
    "submu" => (0x0000, 0x0000),
    "submul" => (0x0000, 0x0000),
    "submult" => (0x0000, 0x0000),
    "submult;" => (0x2AC1, 0x0000),
    "subn" => (0x0000, 0x0000),
    "subnE" => (0x0000, 0x0000),
    "subnE;" => (0x2ACB, 0x0000),
    "subne" => (0x0000, 0x0000),
    "subne;" => (0x228A, 0x0000),
    "subp" => (0x0000, 0x0000),
    "subpl" => (0x0000, 0x0000),
    "subplu" => (0x0000, 0x0000),
    "subplus" => (0x0000, 0x0000),
    "subplus;" => (0x2ABF, 0x0000),
    "subr" => (0x0000, 0x0000),
    "subra" => (0x0000, 0x0000),
    "subrar" => (0x0000, 0x0000),
    "subrarr" => (0x0000, 0x0000),
    "subrarr;" => (0x2979, 0x0000),
    "subs" => (0x0000, 0x0000),
    "subse" => (0x0000, 0x0000),
    "subset" => (0x0000, 0x0000),
    "subset;" => (0x2282, 0x0000),
    "subsete" => (0x0000, 0x0000),
    "subseteq" => (0x0000, 0x0000),
    "subseteq;" => (0x2286, 0x0000),
    "subseteqq" => (0x0000, 0x0000),
    "subseteqq;" => (0x2AC5, 0x0000),
    "subsetn" => (0x0000, 0x0000),
    "subsetne" => (0x0000, 0x0000),
    "subsetneq" => (0x0000, 0x0000),
    "subsetneq;" => (0x228A, 0x0000),
    "subsetneqq" => (0x0000, 0x0000),
    "subsetneqq;" => (0x2ACB, 0x0000),
    "subsi" => (0x0000, 0x0000),
    "subsim" => (0x0000, 0x0000),
    "subsim;" => (0x2AC7, 0x0000),
    "subsu" => (0x0000, 0x0000),
    "subsub" => (0x0000, 0x0000),
    "subsub;" => (0x2AD5, 0x0000),
    "subsup" => (0x0000, 0x0000),
    "subsup;" => (0x2AD3, 0x0000),
    "suc" => (0x0000, 0x0000),
    "succ" => (0x0000, 0x0000),
    "succ;" => (0x227B, 0x0000),
    "succa" => (0x0000, 0x0000),
    "succap" => (0x0000, 0x0000),
    "succapp" => (0x0000, 0x0000),
    "succappr" => (0x0000, 0x0000),
    "succappro" => (0x0000, 0x0000),
    "succapprox" => (0x0000, 0x0000),
    "succapprox;" => (0x2AB8, 0x0000),
    "succc" => (0x0000, 0x0000),
    "succcu" => (0x0000, 0x0000),
    "succcur" => (0x0000, 0x0000),
    "succcurl" => (0x0000, 0x0000),
    "succcurly" => (0x0000, 0x0000),
    "succcurlye" => (0x0000, 0x0000),
    "succcurlyeq" => (0x0000, 0x0000),
    "succcurlyeq;" => (0x227D, 0x0000),
    "succe" => (0x0000, 0x0000),
    "succeq" => (0x0000, 0x0000),
    "succeq;" => (0x2AB0, 0x0000),
    "succn" => (0x0000, 0x0000),
    "succna" => (0x0000, 0x0000),
    "succnap" => (0x0000, 0x0000),
    "succnapp" => (0x0000, 0x0000),
    "succnappr" => (0x0000, 0x0000),
    "succnappro" => (0x0000, 0x0000),
    "succnapprox" => (0x0000, 0x0000),
    "succnapprox;" => (0x2ABA, 0x0000),
    "succne" => (0x0000, 0x0000),
    "succneq" => (0x0000, 0x0000),
    "succneqq" => (0x0000, 0x0000),
    "succneqq;" => (0x2AB6, 0x0000),
    "succns" => (0x0000, 0x0000),
    "succnsi" => (0x0000, 0x0000),
    "succnsim" => (0x0000, 0x0000),
    "succnsim;" => (0x22E9, 0x0000),
    "succs" => (0x0000, 0x0000),
    "succsi" => (0x0000, 0x0000),
    "succsim" => (0x0000, 0x0000),
    "succsim;" => (0x227F, 0x0000),
    "sum" => (0x0000, 0x0000),
    "sum;" => (0x2211, 0x0000),
    "sun" => (0x0000, 0x0000),
    "sung" => (0x0000, 0x0000),
    "sung;" => (0x266A, 0x0000),
    "sup" => (0x0000, 0x0000),
    "sup1" => (0x00B9, 0x0000),
    "sup1;" => (0x00B9, 0x0000),
    "sup2" => (0x00B2, 0x0000),
    "sup2;" => (0x00B2, 0x0000),
    "sup3" => (0x00B3, 0x0000),
    "sup3;" => (0x00B3, 0x0000),
    "sup;" => (0x2283, 0x0000),
    "supE" => (0x0000, 0x0000),
    "supE;" => (0x2AC6, 0x0000),
    "supd" => (0x0000, 0x0000),
    "supdo" => (0x0000, 0x0000),
    "supdot" => (0x0000, 0x0000),
    "supdot;" => (0x2ABE, 0x0000),
    "supds" => (0x0000, 0x0000),
    "supdsu" => (0x0000, 0x0000),
    "supdsub" => (0x0000, 0x0000),
    "supdsub;" => (0x2AD8, 0x0000),
    "supe" => (0x0000, 0x0000),
    "supe;" => (0x2287, 0x0000),
    "suped" => (0x0000, 0x0000),
    "supedo" => (0x0000, 0x0000),
    "supedot" => (0x0000, 0x0000),
    "supedot;" => (0x2AC4, 0x0000),
    "suph" => (0x0000, 0x0000),
    "suphs" => (0x0000, 0x0000),
    "suphso" => (0x0000, 0x0000),
    "suphsol" => (0x0000, 0x0000),
    "suphsol;" => (0x27C9, 0x0000),
    "suphsu" => (0x0000, 0x0000),
    "suphsub" => (0x0000, 0x0000),
    "suphsub;" => (0x2AD7, 0x0000),
    "supl" => (0x0000, 0x0000),
    "supla" => (0x0000, 0x0000),
    "suplar" => (0x0000, 0x0000),
    "suplarr" => (0x0000, 0x0000),
    "suplarr;" => (0x297B, 0x0000),
    "supm" => (0x0000, 0x0000),
    "supmu" => (0x0000, 0x0000),
    "supmul" => (0x0000, 0x0000),
    "supmult" => (0x0000, 0x0000),
    "supmult;" => (0x2AC2, 0x0000),
    "supn" => (0x0000, 0x0000),
    "supnE" => (0x0000, 0x0000),
    "supnE;" => (0x2ACC, 0x0000),
    "supne" => (0x0000, 0x0000),
    "supne;" => (0x228B, 0x0000),
    "supp" => (0x0000, 0x0000),
    "suppl" => (0x0000, 0x0000),
    "supplu" => (0x0000, 0x0000),
    "supplus" => (0x0000, 0x0000),
    "supplus;" => (0x2AC0, 0x0000),
    "sups" => (0x0000, 0x0000),
    "supse" => (0x0000, 0x0000),
    "supset" => (0x0000, 0x0000),
    "supset;" => (0x2283, 0x0000),
    "supsete" => (0x0000, 0x0000),
    "supseteq" => (0x0000, 0x0000),
    "supseteq;" => (0x2287, 0x0000),
    "supseteqq" => (0x0000, 0x0000),
    "supseteqq;" => (0x2AC6, 0x0000),
    "supsetn" => (0x0000, 0x0000),
    "supsetne" => (0x0000, 0x0000),
    "supsetneq" => (0x0000, 0x0000),
    "supsetneq;" => (0x228B, 0x0000),
    "supsetneqq" => (0x0000, 0x0000),
    "supsetneqq;" => (0x2ACC, 0x0000),
    "supsi" => (0x0000, 0x0000),
    "supsim" => (0x0000, 0x0000),
    "supsim;" => (0x2AC8, 0x0000),
    "supsu" => (0x0000, 0x0000),
    "supsub" => (0x0000, 0x0000),
    "supsub;" => (0x2AD4, 0x0000),
    "supsup" => (0x0000, 0x0000),
    "supsup;" => (0x2AD6, 0x0000),
    "sw" => (0x0000, 0x0000),
    "swA" => (0x0000, 0x0000),
    "swAr" => (0x0000, 0x0000),
    "swArr" => (0x0000, 0x0000),
    "swArr;" => (0x21D9, 0x0000),
    "swa" => (0x0000, 0x0000),
    "swar" => (0x0000, 0x0000),
    "swarh" => (0x0000, 0x0000),
    "swarhk" => (0x0000, 0x0000),
    "swarhk;" => (0x2926, 0x0000),
    "swarr" => (0x0000, 0x0000),
    "swarr;" => (0x2199, 0x0000),
    "swarro" => (0x0000, 0x0000),
    "swarrow" => (0x0000, 0x0000),
    "swarrow;" => (0x2199, 0x0000),
    "swn" => (0x0000, 0x0000),
    "swnw" => (0x0000, 0x0000),
    "swnwa" => (0x0000, 0x0000),
    "swnwar" => (0x0000, 0x0000),
    "swnwar;" => (0x292A, 0x0000),
    "sz" => (0x0000, 0x0000),
    "szl" => (0x0000, 0x0000),
    "szli" => (0x0000, 0x0000),
    "szlig" => (0x00DF, 0x0000),
    "szlig;" => (0x00DF, 0x0000),
    "t" => (0x0000, 0x0000),
    "ta" => (0x0000, 0x0000),
    "tar" => (0x0000, 0x0000),
    "targ" => (0x0000, 0x0000),
    "targe" => (0x0000, 0x0000),
    "target" => (0x0000, 0x0000),
    "target;" => (0x2316, 0x0000),
    "tau" => (0x0000, 0x0000),
    "tau;" => (0x03C4, 0x0000),
    "tb" => (0x0000, 0x0000),
    "tbr" => (0x0000, 0x0000),
    "tbrk" => (0x0000, 0x0000),
    "tbrk;" => (0x23B4, 0x0000),
    "tc" => (0x0000, 0x0000),
    "tca" => (0x0000, 0x0000),
    "tcar" => (0x0000, 0x0000),
    "tcaro" => (0x0000, 0x0000),
    "tcaron" => (0x0000, 0x0000),
    "tcaron;" => (0x0165, 0x0000),
    "tce" => (0x0000, 0x0000),
    "tced" => (0x0000, 0x0000),
    "tcedi" => (0x0000, 0x0000),
    "tcedil" => (0x0000, 0x0000),
    "tcedil;" => (0x0163, 0x0000),
    "tcy" => (0x0000, 0x0000),
    "tcy;" => (0x0442, 0x0000),
    "td" => (0x0000, 0x0000),
    "tdo" => (0x0000, 0x0000),
    "tdot" => (0x0000, 0x0000),
    "tdot;" => (0x20DB, 0x0000),
    "te" => (0x0000, 0x0000),
    "tel" => (0x0000, 0x0000),
    "telr" => (0x0000, 0x0000),
    "telre" => (0x0000, 0x0000),
    "telrec" => (0x0000, 0x0000),
    "telrec;" => (0x2315, 0x0000),
    "tf" => (0x0000, 0x0000),
    "tfr" => (0x0000, 0x0000),
    "tfr;" => (0x1D531, 0x0000),
    "th" => (0x0000, 0x0000),
    "the" => (0x0000, 0x0000),
    "ther" => (0x0000, 0x0000),
    "there" => (0x0000, 0x0000),
    "there4" => (0x0000, 0x0000),
    "there4;" => (0x2234, 0x0000),
    "theref" => (0x0000, 0x0000),
    "therefo" => (0x0000, 0x0000),
    "therefor" => (0x0000, 0x0000),
    "therefore" => (0x0000, 0x0000),
    "therefore;" => (0x2234, 0x0000),
    "thet" => (0x0000, 0x0000),
    "theta" => (0x0000, 0x0000),
    "theta;" => (0x03B8, 0x0000),
    "thetas" => (0x0000, 0x0000),
    "thetasy" => (0x0000, 0x0000),
    "thetasym" => (0x0000, 0x0000),
    "thetasym;" => (0x03D1, 0x0000),
    "thetav" => (0x0000, 0x0000),
    "thetav;" => (0x03D1, 0x0000),
    "thi" => (0x0000, 0x0000),
    "thic" => (0x0000, 0x0000),
    "thick" => (0x0000, 0x0000),
    "thicka" => (0x0000, 0x0000),
    "thickap" => (0x0000, 0x0000),
    "thickapp" => (0x0000, 0x0000),
    "thickappr" => (0x0000, 0x0000),
    "thickappro" => (0x0000, 0x0000),
    "thickapprox" => (0x0000, 0x0000),
    "thickapprox;" => (0x2248, 0x0000),
    "thicks" => (0x0000, 0x0000),
    "thicksi" => (0x0000, 0x0000),
    "thicksim" => (0x0000, 0x0000),
    "thicksim;" => (0x223C, 0x0000),
    "thin" => (0x0000, 0x0000),
    "thins" => (0x0000, 0x0000),
    "thinsp" => (0x0000, 0x0000),
    "thinsp;" => (0x2009, 0x0000),
    "thk" => (0x0000, 0x0000),
    "thka" => (0x0000, 0x0000),
    "thkap" => (0x0000, 0x0000),
    "thkap;" => (0x2248, 0x0000),
    "thks" => (0x0000, 0x0000),
    "thksi" => (0x0000, 0x0000),
    "thksim" => (0x0000, 0x0000),
    "thksim;" => (0x223C, 0x0000),
    "tho" => (0x0000, 0x0000),
    "thor" => (0x0000, 0x0000),
    "thorn" => (0x00FE, 0x0000),
    "thorn;" => (0x00FE, 0x0000),
    "ti" => (0x0000, 0x0000),
    "til" => (0x0000, 0x0000),
    "tild" => (0x0000, 0x0000),
    "tilde" => (0x0000, 0x0000),
    "tilde;" => (0x02DC, 0x0000),
    "tim" => (0x0000, 0x0000),
    "time" => (0x0000, 0x0000),
    "times" => (0x00D7, 0x0000),
    "times;" => (0x00D7, 0x0000),
    "timesb" => (0x0000, 0x0000),
    "timesb;" => (0x22A0, 0x0000),
    "timesba" => (0x0000, 0x0000),
    "timesbar" => (0x0000, 0x0000),
    "timesbar;" => (0x2A31, 0x0000),
    "timesd" => (0x0000, 0x0000),
    "timesd;" => (0x2A30, 0x0000),
    "tin" => (0x0000, 0x0000),
    "tint" => (0x0000, 0x0000),
    "tint;" => (0x222D, 0x0000),
    "to" => (0x0000, 0x0000),
    "toe" => (0x0000, 0x0000),
    "toea" => (0x0000, 0x0000),
    "toea;" => (0x2928, 0x0000),
    "top" => (0x0000, 0x0000),
    "top;" => (0x22A4, 0x0000),
    "topb" => (0x0000, 0x0000),
    "topbo" => (0x0000, 0x0000),
    "topbot" => (0x0000, 0x0000),
    "topbot;" => (0x2336, 0x0000),
    "topc" => (0x0000, 0x0000),
    "topci" => (0x0000, 0x0000),
    "topcir" => (0x0000, 0x0000),
    "topcir;" => (0x2AF1, 0x0000),
    "topf" => (0x0000, 0x0000),
    "topf;" => (0x1D565, 0x0000),
    "topfo" => (0x0000, 0x0000),
    "topfor" => (0x0000, 0x0000),
    "topfork" => (0x0000, 0x0000),
    "topfork;" => (0x2ADA, 0x0000),
    "tos" => (0x0000, 0x0000),
    "tosa" => (0x0000, 0x0000),
    "tosa;" => (0x2929, 0x0000),
    "tp" => (0x0000, 0x0000),
    "tpr" => (0x0000, 0x0000),
    "tpri" => (0x0000, 0x0000),
    "tprim" => (0x0000, 0x0000),
    "tprime" => (0x0000, 0x0000),
    "tprime;" => (0x2034, 0x0000),
    "tr" => (0x0000, 0x0000),
    "tra" => (0x0000, 0x0000),
    "trad" => (0x0000, 0x0000),
    "trade" => (0x0000, 0x0000),
    "trade;" => (0x2122, 0x0000),
    "tri" => (0x0000, 0x0000),
    "tria" => (0x0000, 0x0000),
    "trian" => (0x0000, 0x0000),
    "triang" => (0x0000, 0x0000),
    "triangl" => (0x0000, 0x0000),
    "triangle" => (0x0000, 0x0000),
    "triangle;" => (0x25B5, 0x0000),
    "triangled" => (0x0000, 0x0000),
    "triangledo" => (0x0000, 0x0000),
    "triangledow" => (0x0000, 0x0000),
    "triangledown" => (0x0000, 0x0000),
    "triangledown;" => (0x25BF, 0x0000),
    "trianglel" => (0x0000, 0x0000),
    "trianglele" => (0x0000, 0x0000),
    "trianglelef" => (0x0000, 0x0000),
    "triangleleft" => (0x0000, 0x0000),
    "triangleleft;" => (0x25C3, 0x0000),
    "trianglelefte" => (0x0000, 0x0000),
    "trianglelefteq" => (0x0000, 0x0000),
    "trianglelefteq;" => (0x22B4, 0x0000),
    "triangleq" => (0x0000, 0x0000),
    "triangleq;" => (0x225C, 0x0000),
    "triangler" => (0x0000, 0x0000),
    "triangleri" => (0x0000, 0x0000),
    "trianglerig" => (0x0000, 0x0000),
    "trianglerigh" => (0x0000, 0x0000),
    "triangleright" => (0x0000, 0x0000),
    "triangleright;" => (0x25B9, 0x0000),
    "trianglerighte" => (0x0000, 0x0000),
    "trianglerighteq" => (0x0000, 0x0000),
    "trianglerighteq;" => (0x22B5, 0x0000),
    "trid" => (0x0000, 0x0000),
    "trido" => (0x0000, 0x0000),
    "tridot" => (0x0000, 0x0000),
    "tridot;" => (0x25EC, 0x0000),
    "trie" => (0x0000, 0x0000),
    "trie;" => (0x225C, 0x0000),
    "trim" => (0x0000, 0x0000),
    "trimi" => (0x0000, 0x0000),
    "trimin" => (0x0000, 0x0000),
    "triminu" => (0x0000, 0x0000),
    "triminus" => (0x0000, 0x0000),
    "triminus;" => (0x2A3A, 0x0000),
    "trip" => (0x0000, 0x0000),
    "tripl" => (0x0000, 0x0000),
    "triplu" => (0x0000, 0x0000),
    "triplus" => (0x0000, 0x0000),
    "triplus;" => (0x2A39, 0x0000),
    "tris" => (0x0000, 0x0000),
    "trisb" => (0x0000, 0x0000),
    "trisb;" => (0x29CD, 0x0000),
    "trit" => (0x0000, 0x0000),
    "triti" => (0x0000, 0x0000),
    "tritim" => (0x0000, 0x0000),
    "tritime" => (0x0000, 0x0000),
    "tritime;" => (0x2A3B, 0x0000),
    "trp" => (0x0000, 0x0000),
    "trpe" => (0x0000, 0x0000),
    "trpez" => (0x0000, 0x0000),
    "trpezi" => (0x0000, 0x0000),
    "trpeziu" => (0x0000, 0x0000),
    "trpezium" => (0x0000, 0x0000),
    "trpezium;" => (0x23E2, 0x0000),
    "ts" => (0x0000, 0x0000),
    "tsc" => (0x0000, 0x0000),
    "tscr" => (0x0000, 0x0000),
    "tscr;" => (0x1D4C9, 0x0000),
    "tscy" => (0x0000, 0x0000),
    "tscy;" => (0x0446, 0x0000),
    "tsh" => (0x0000, 0x0000),
    "tshc" => (0x0000, 0x0000),
    "tshcy" => (0x0000, 0x0000),
    "tshcy;" => (0x045B, 0x0000),
    "tst" => (0x0000, 0x0000),
    "tstr" => (0x0000, 0x0000),
    "tstro" => (0x0000, 0x0000),
    "tstrok" => (0x0000, 0x0000),
    "tstrok;" => (0x0167, 0x0000),
    "tw" => (0x0000, 0x0000),
    "twi" => (0x0000, 0x0000),
    "twix" => (0x0000, 0x0000),
    "twixt" => (0x0000, 0x0000),
    "twixt;" => (0x226C, 0x0000),
    "two" => (0x0000, 0x0000),
    "twoh" => (0x0000, 0x0000),
    "twohe" => (0x0000, 0x0000),
    "twohea" => (0x0000, 0x0000),
    "twohead" => (0x0000, 0x0000),
    "twoheadl" => (0x0000, 0x0000),
    "twoheadle" => (0x0000, 0x0000),
    "twoheadlef" => (0x0000, 0x0000),
    "twoheadleft" => (0x0000, 0x0000),
    "twoheadlefta" => (0x0000, 0x0000),
    "twoheadleftar" => (0x0000, 0x0000),
    "twoheadleftarr" => (0x0000, 0x0000),
    "twoheadleftarro" => (0x0000, 0x0000),
    "twoheadleftarrow" => (0x0000, 0x0000),
    "twoheadleftarrow;" => (0x219E, 0x0000),
    "twoheadr" => (0x0000, 0x0000),
    "twoheadri" => (0x0000, 0x0000),
    "twoheadrig" => (0x0000, 0x0000),
    "twoheadrigh" => (0x0000, 0x0000),
    "twoheadright" => (0x0000, 0x0000),
    "twoheadrighta" => (0x0000, 0x0000),
    "twoheadrightar" => (0x0000, 0x0000),
    "twoheadrightarr" => (0x0000, 0x0000),
    "twoheadrightarro" => (0x0000, 0x0000),
    "twoheadrightarrow" => (0x0000, 0x0000),
    "twoheadrightarrow;" => (0x21A0, 0x0000),
    "u" => (0x0000, 0x0000),
    "uA" => (0x0000, 0x0000),
    "uAr" => (0x0000, 0x0000),
    "uArr" => (0x0000, 0x0000),
    "uArr;" => (0x21D1, 0x0000),
    "uH" => (0x0000, 0x0000),
    "uHa" => (0x0000, 0x0000),
    "uHar" => (0x0000, 0x0000),
    "uHar;" => (0x2963, 0x0000),
    "ua" => (0x0000, 0x0000),
    "uac" => (0x0000, 0x0000),
    "uacu" => (0x0000, 0x0000),
    "uacut" => (0x0000, 0x0000),
    "uacute" => (0x00FA, 0x0000),
    "uacute;" => (0x00FA, 0x0000),
    "uar" => (0x0000, 0x0000),
    "uarr" => (0x0000, 0x0000),
    "uarr;" => (0x2191, 0x0000),
    "ub" => (0x0000, 0x0000),
    "ubr" => (0x0000, 0x0000),
    "ubrc" => (0x0000, 0x0000),
    "ubrcy" => (0x0000, 0x0000),
    "ubrcy;" => (0x045E, 0x0000),
    "ubre" => (0x0000, 0x0000),
    "ubrev" => (0x0000, 0x0000),
    "ubreve" => (0x0000, 0x0000),
    "ubreve;" => (0x016D, 0x0000),
    "uc" => (0x0000, 0x0000),
    "uci" => (0x0000, 0x0000),
    "ucir" => (0x0000, 0x0000),
    "ucirc" => (0x00FB, 0x0000),
    "ucirc;" => (0x00FB, 0x0000),
    "ucy" => (0x0000, 0x0000),
    "ucy;" => (0x0443, 0x0000),
    "ud" => (0x0000, 0x0000),
    "uda" => (0x0000, 0x0000),
    "udar" => (0x0000, 0x0000),
    "udarr" => (0x0000, 0x0000),
    "udarr;" => (0x21C5, 0x0000),
    "udb" => (0x0000, 0x0000),
    "udbl" => (0x0000, 0x0000),
    "udbla" => (0x0000, 0x0000),
    "udblac" => (0x0000, 0x0000),
    "udblac;" => (0x0171, 0x0000),
    "udh" => (0x0000, 0x0000),
    "udha" => (0x0000, 0x0000),
    "udhar" => (0x0000, 0x0000),
    "udhar;" => (0x296E, 0x0000),
    "uf" => (0x0000, 0x0000),
    "ufi" => (0x0000, 0x0000),
    "ufis" => (0x0000, 0x0000),
    "ufish" => (0x0000, 0x0000),
    "ufisht" => (0x0000, 0x0000),
    "ufisht;" => (0x297E, 0x0000),
    "ufr" => (0x0000, 0x0000),
    "ufr;" => (0x1D532, 0x0000),
    "ug" => (0x0000, 0x0000),
    "ugr" => (0x0000, 0x0000),
    "ugra" => (0x0000, 0x0000),
    "ugrav" => (0x0000, 0x0000),
    "ugrave" => (0x00F9, 0x0000),
    "ugrave;" => (0x00F9, 0x0000),
    "uh" => (0x0000, 0x0000),
    "uha" => (0x0000, 0x0000),
    "uhar" => (0x0000, 0x0000),
    "uharl" => (0x0000, 0x0000),
    "uharl;" => (0x21BF, 0x0000),
    "uharr" => (0x0000, 0x0000),
    "uharr;" => (0x21BE, 0x0000),
    "uhb" => (0x0000, 0x0000),
    "uhbl" => (0x0000, 0x0000),
    "uhblk" => (0x0000, 0x0000),
    "uhblk;" => (0x2580, 0x0000),
    "ul" => (0x0000, 0x0000),
    "ulc" => (0x0000, 0x0000),
    "ulco" => (0x0000, 0x0000),
    "ulcor" => (0x0000, 0x0000),
    "ulcorn" => (0x0000, 0x0000),
    "ulcorn;" => (0x231C, 0x0000),
    "ulcorne" => (0x0000, 0x0000),
    "ulcorner" => (0x0000, 0x0000),
    "ulcorner;" => (0x231C, 0x0000),
    "ulcr" => (0x0000, 0x0000),
    "ulcro" => (0x0000, 0x0000),
    "ulcrop" => (0x0000, 0x0000),
    "ulcrop;" => (0x230F, 0x0000),
    "ult" => (0x0000, 0x0000),
    "ultr" => (0x0000, 0x0000),
    "ultri" => (0x0000, 0x0000),
    "ultri;" => (0x25F8, 0x0000),
    "um" => (0x0000, 0x0000),
    "uma" => (0x0000, 0x0000),
    "umac" => (0x0000, 0x0000),
    "umacr" => (0x0000, 0x0000),
    "umacr;" => (0x016B, 0x0000),
    "uml" => (0x00A8, 0x0000),
    "uml;" => (0x00A8, 0x0000),
    "uo" => (0x0000, 0x0000),
    "uog" => (0x0000, 0x0000),
    "uogo" => (0x0000, 0x0000),
    "uogon" => (0x0000, 0x0000),
    "uogon;" => (0x0173, 0x0000),
    "uop" => (0x0000, 0x0000),
    "uopf" => (0x0000, 0x0000),
    "uopf;" => (0x1D566, 0x0000),
    "up" => (0x0000, 0x0000),
    "upa" => (0x0000, 0x0000),
    "upar" => (0x0000, 0x0000),
    "uparr" => (0x0000, 0x0000),
    "uparro" => (0x0000, 0x0000),
    "uparrow" => (0x0000, 0x0000),
    "uparrow;" => (0x2191, 0x0000),
    "upd" => (0x0000, 0x0000),
    "updo" => (0x0000, 0x0000),
    "updow" => (0x0000, 0x0000),
    "updown" => (0x0000, 0x0000),
    "updowna" => (0x0000, 0x0000),
    "updownar" => (0x0000, 0x0000),
    "updownarr" => (0x0000, 0x0000),
    "updownarro" => (0x0000, 0x0000),
    "updownarrow" => (0x0000, 0x0000),
    "updownarrow;" => (0x2195, 0x0000),
    "uph" => (0x0000, 0x0000),
    "upha" => (0x0000, 0x0000),
    "uphar" => (0x0000, 0x0000),
    "upharp" => (0x0000, 0x0000),
    "upharpo" => (0x0000, 0x0000),
    "upharpoo" => (0x0000, 0x0000),
    "upharpoon" => (0x0000, 0x0000),
    "upharpoonl" => (0x0000, 0x0000),
    "upharpoonle" => (0x0000, 0x0000),
    "upharpoonlef" => (0x0000, 0x0000),
    "upharpoonleft" => (0x0000, 0x0000),
    "upharpoonleft;" => (0x21BF, 0x0000),
    "upharpoonr" => (0x0000, 0x0000),
    "upharpoonri" => (0x0000, 0x0000),
    "upharpoonrig" => (0x0000, 0x0000),
    "upharpoonrigh" => (0x0000, 0x0000),
    "upharpoonright" => (0x0000, 0x0000),
    "upharpoonright;" => (0x21BE, 0x0000),
    "upl" => (0x0000, 0x0000),
    "uplu" => (0x0000, 0x0000),
    "uplus" => (0x0000, 0x0000),
    "uplus;" => (0x228E, 0x0000),
    "ups" => (0x0000, 0x0000),
    "upsi" => (0x0000, 0x0000),
    "upsi;" => (0x03C5, 0x0000),
    "upsih" => (0x0000, 0x0000),
    "upsih;" => (0x03D2, 0x0000),
    "upsil" => (0x0000, 0x0000),
    "upsilo" => (0x0000, 0x0000),
    "upsilon" => (0x0000, 0x0000),
    "upsilon;" => (0x03C5, 0x0000),
    "upu" => (0x0000, 0x0000),
    "upup" => (0x0000, 0x0000),
    "upupa" => (0x0000, 0x0000),
    "upupar" => (0x0000, 0x0000),
    "upuparr" => (0x0000, 0x0000),
    "upuparro" => (0x0000, 0x0000),
    "upuparrow" => (0x0000, 0x0000),
    "upuparrows" => (0x0000, 0x0000),
    "upuparrows;" => (0x21C8, 0x0000),
    "ur" => (0x0000, 0x0000),
    "urc" => (0x0000, 0x0000),
    "urco" => (0x0000, 0x0000),
    "urcor" => (0x0000, 0x0000),
    "urcorn" => (0x0000, 0x0000),
    "urcorn;" => (0x231D, 0x0000),
    "urcorne" => (0x0000, 0x0000),
    "urcorner" => (0x0000, 0x0000),
    "urcorner;" => (0x231D, 0x0000),
    "urcr" => (0x0000, 0x0000),
    "urcro" => (0x0000, 0x0000),
    "urcrop" => (0x0000, 0x0000),
    "urcrop;" => (0x230E, 0x0000),
    "uri" => (0x0000, 0x0000),
    "urin" => (0x0000, 0x0000),
    "uring" => (0x0000, 0x0000),
    "uring;" => (0x016F, 0x0000),
    "urt" => (0x0000, 0x0000),
    "urtr" => (0x0000, 0x0000),
    "urtri" => (0x0000, 0x0000),
    "urtri;" => (0x25F9, 0x0000),
    "us" => (0x0000, 0x0000),
    "usc" => (0x0000, 0x0000),
    "uscr" => (0x0000, 0x0000),
    "uscr;" => (0x1D4CA, 0x0000),
    "ut" => (0x0000, 0x0000),
    "utd" => (0x0000, 0x0000),
    "utdo" => (0x0000, 0x0000),
    "utdot" => (0x0000, 0x0000),
    "utdot;" => (0x22F0, 0x0000),
    "uti" => (0x0000, 0x0000),
    "util" => (0x0000, 0x0000),
    "utild" => (0x0000, 0x0000),
    "utilde" => (0x0000, 0x0000),
    "utilde;" => (0x0169, 0x0000),
    "utr" => (0x0000, 0x0000),
    "utri" => (0x0000, 0x0000),
    "utri;" => (0x25B5, 0x0000),
    "utrif" => (0x0000, 0x0000),
    "utrif;" => (0x25B4, 0x0000),
    "uu" => (0x0000, 0x0000),
    "uua" => (0x0000, 0x0000),
    "uuar" => (0x0000, 0x0000),
    "uuarr" => (0x0000, 0x0000),
    "uuarr;" => (0x21C8, 0x0000),
    "uum" => (0x0000, 0x0000),
    "uuml" => (0x00FC, 0x0000),
    "uuml;" => (0x00FC, 0x0000),
    "uw" => (0x0000, 0x0000),
    "uwa" => (0x0000, 0x0000),
    "uwan" => (0x0000, 0x0000),
    "uwang" => (0x0000, 0x0000),
    "uwangl" => (0x0000, 0x0000),
    "uwangle" => (0x0000, 0x0000),
    "uwangle;" => (0x29A7, 0x0000),
    "v" => (0x0000, 0x0000),
    "vA" => (0x0000, 0x0000),
    "vAr" => (0x0000, 0x0000),
    "vArr" => (0x0000, 0x0000),
    "vArr;" => (0x21D5, 0x0000),
    "vB" => (0x0000, 0x0000),
    "vBa" => (0x0000, 0x0000),
    "vBar" => (0x0000, 0x0000),
    "vBar;" => (0x2AE8, 0x0000),
    "vBarv" => (0x0000, 0x0000),
    "vBarv;" => (0x2AE9, 0x0000),
    "vD" => (0x0000, 0x0000),
    "vDa" => (0x0000, 0x0000),
    "vDas" => (0x0000, 0x0000),
    "vDash" => (0x0000, 0x0000),
    "vDash;" => (0x22A8, 0x0000),
    "va" => (0x0000, 0x0000),
    "van" => (0x0000, 0x0000),
    "vang" => (0x0000, 0x0000),
    "vangr" => (0x0000, 0x0000),
    "vangrt" => (0x0000, 0x0000),
    "vangrt;" => (0x299C, 0x0000),
    "var" => (0x0000, 0x0000),
    "vare" => (0x0000, 0x0000),
    "varep" => (0x0000, 0x0000),
    "vareps" => (0x0000, 0x0000),
    "varepsi" => (0x0000, 0x0000),
    "varepsil" => (0x0000, 0x0000),
    "varepsilo" => (0x0000, 0x0000),
    "varepsilon" => (0x0000, 0x0000),
    "varepsilon;" => (0x03F5, 0x0000),
    "vark" => (0x0000, 0x0000),
    "varka" => (0x0000, 0x0000),
    "varkap" => (0x0000, 0x0000),
    "varkapp" => (0x0000, 0x0000),
    "varkappa" => (0x0000, 0x0000),
    "varkappa;" => (0x03F0, 0x0000),
    "varn" => (0x0000, 0x0000),
    "varno" => (0x0000, 0x0000),
    "varnot" => (0x0000, 0x0000),
    "varnoth" => (0x0000, 0x0000),
    "varnothi" => (0x0000, 0x0000),
    "varnothin" => (0x0000, 0x0000),
    "varnothing" => (0x0000, 0x0000),
    "varnothing;" => (0x2205, 0x0000),
    "varp" => (0x0000, 0x0000),
    "varph" => (0x0000, 0x0000),
    "varphi" => (0x0000, 0x0000),
    "varphi;" => (0x03D5, 0x0000),
    "varpi" => (0x0000, 0x0000),
    "varpi;" => (0x03D6, 0x0000),
    "varpr" => (0x0000, 0x0000),
    "varpro" => (0x0000, 0x0000),
    "varprop" => (0x0000, 0x0000),
    "varpropt" => (0x0000, 0x0000),
    "varpropto" => (0x0000, 0x0000),
    "varpropto;" => (0x221D, 0x0000),
    "varr" => (0x0000, 0x0000),
    "varr;" => (0x2195, 0x0000),
    "varrh" => (0x0000, 0x0000),
    "varrho" => (0x0000, 0x0000),
    "varrho;" => (0x03F1, 0x0000),
    "vars" => (0x0000, 0x0000),
    "varsi" => (0x0000, 0x0000),
    "varsig" => (0x0000, 0x0000),
    "varsigm" => (0x0000, 0x0000),
    "varsigma" => (0x0000, 0x0000),
    "varsigma;" => (0x03C2, 0x0000),
    "varsu" => (0x0000, 0x0000),
    "varsub" => (0x0000, 0x0000),
    "varsubs" => (0x0000, 0x0000),
    "varsubse" => (0x0000, 0x0000),
    "varsubset" => (0x0000, 0x0000),
    "varsubsetn" => (0x0000, 0x0000),
    "varsubsetne" => (0x0000, 0x0000),
    "varsubsetneq" => (0x0000, 0x0000),
    "varsubsetneq;" => (0x228A, 0xFE00),
    "varsubsetneqq" => (0x0000, 0x0000),
    "varsubsetneqq;" => (0x2ACB, 0xFE00),
    "varsup" => (0x0000, 0x0000),
    "varsups" => (0x0000, 0x0000),
    "varsupse" => (0x0000, 0x0000),
    "varsupset" => (0x0000, 0x0000),
    "varsupsetn" => (0x0000, 0x0000),
    "varsupsetne" => (0x0000, 0x0000),
    "varsupsetneq" => (0x0000, 0x0000),
    "varsupsetneq;" => (0x228B, 0xFE00),
    "varsupsetneqq" => (0x0000, 0x0000),
    "varsupsetneqq;" => (0x2ACC, 0xFE00),
    "vart" => (0x0000, 0x0000),
    "varth" => (0x0000, 0x0000),
    "varthe" => (0x0000, 0x0000),
    "varthet" => (0x0000, 0x0000),
    "vartheta" => (0x0000, 0x0000),
    "vartheta;" => (0x03D1, 0x0000),
    "vartr" => (0x0000, 0x0000),
    "vartri" => (0x0000, 0x0000),
    "vartria" => (0x0000, 0x0000),
    "vartrian" => (0x0000, 0x0000),
    "vartriang" => (0x0000, 0x0000),
    "vartriangl" => (0x0000, 0x0000),
    "vartriangle" => (0x0000, 0x0000),
    "vartrianglel" => (0x0000, 0x0000),
    "vartrianglele" => (0x0000, 0x0000),
    "vartrianglelef" => (0x0000, 0x0000),
    "vartriangleleft" => (0x0000, 0x0000),
    "vartriangleleft;" => (0x22B2, 0x0000),
    "vartriangler" => (0x0000, 0x0000),
    "vartriangleri" => (0x0000, 0x0000),
    "vartrianglerig" => (0x0000, 0x0000),
    "vartrianglerigh" => (0x0000, 0x0000),
    "vartriangleright" => (0x0000, 0x0000),
    "vartriangleright;" => (0x22B3, 0x0000),
    "vc" => (0x0000, 0x0000),
    "vcy" => (0x0000, 0x0000),
    "vcy;" => (0x0432, 0x0000),
    "vd" => (0x0000, 0x0000),
    "vda" => (0x0000, 0x0000),
    "vdas" => (0x0000, 0x0000),
    "vdash" => (0x0000, 0x0000),
    "vdash;" => (0x22A2, 0x0000),
    "ve" => (0x0000, 0x0000),
    "vee" => (0x0000, 0x0000),
    "vee;" => (0x2228, 0x0000),
    "veeb" => (0x0000, 0x0000),
    "veeba" => (0x0000, 0x0000),
    "veebar" => (0x0000, 0x0000),
    "veebar;" => (0x22BB, 0x0000),
    "veee" => (0x0000, 0x0000),
    "veeeq" => (0x0000, 0x0000),
    "veeeq;" => (0x225A, 0x0000),
    "vel" => (0x0000, 0x0000),
    "vell" => (0x0000, 0x0000),
    "velli" => (0x0000, 0x0000),
    "vellip" => (0x0000, 0x0000),
    "vellip;" => (0x22EE, 0x0000),
    "ver" => (0x0000, 0x0000),
    "verb" => (0x0000, 0x0000),
    "verba" => (0x0000, 0x0000),
    "verbar" => (0x0000, 0x0000),
    "verbar;" => (0x007C, 0x0000),
    "vert" => (0x0000, 0x0000),
    "vert;" => (0x007C, 0x0000),
    "vf" => (0x0000, 0x0000),
    "vfr" => (0x0000, 0x0000),
    "vfr;" => (0x1D533, 0x0000),
    "vl" => (0x0000, 0x0000),
    "vlt" => (0x0000, 0x0000),
    "vltr" => (0x0000, 0x0000),
    "vltri" => (0x0000, 0x0000),
    "vltri;" => (0x22B2, 0x0000),
    "vn" => (0x0000, 0x0000),
    "vns" => (0x0000, 0x0000),
    "vnsu" => (0x0000, 0x0000),
    "vnsub" => (0x0000, 0x0000),
    "vnsub;" => (0x2282, 0x20D2),
    "vnsup" => (0x0000, 0x0000),
    "vnsup;" => (0x2283, 0x20D2),
    "vo" => (0x0000, 0x0000),
    "vop" => (0x0000, 0x0000),
    "vopf" => (0x0000, 0x0000),
    "vopf;" => (0x1D567, 0x0000),
    "vp" => (0x0000, 0x0000),
    "vpr" => (0x0000, 0x0000),
    "vpro" => (0x0000, 0x0000),
    "vprop" => (0x0000, 0x0000),
    "vprop;" => (0x221D, 0x0000),
    "vr" => (0x0000, 0x0000),
    "vrt" => (0x0000, 0x0000),
    "vrtr" => (0x0000, 0x0000),
    "vrtri" => (0x0000, 0x0000),
    "vrtri;" => (0x22B3, 0x0000),
    "vs" => (0x0000, 0x0000),
    "vsc" => (0x0000, 0x0000),
    "vscr" => (0x0000, 0x0000),
    "vscr;" => (0x1D4CB, 0x0000),
    "vsu" => (0x0000, 0x0000),
    "vsub" => (0x0000, 0x0000),
    "vsubn" => (0x0000, 0x0000),
    "vsubnE" => (0x0000, 0x0000),
    "vsubnE;" => (0x2ACB, 0xFE00),
    "vsubne" => (0x0000, 0x0000),
    "vsubne;" => (0x228A, 0xFE00),
    "vsup" => (0x0000, 0x0000),
    "vsupn" => (0x0000, 0x0000),
    "vsupnE" => (0x0000, 0x0000),
    "vsupnE;" => (0x2ACC, 0xFE00),
    "vsupne" => (0x0000, 0x0000),
    "vsupne;" => (0x228B, 0xFE00),
    "vz" => (0x0000, 0x0000),
    "vzi" => (0x0000, 0x0000),
    "vzig" => (0x0000, 0x0000),
    "vzigz" => (0x0000, 0x0000),
    "vzigza" => (0x0000, 0x0000),
    "vzigzag" => (0x0000, 0x0000),
    "vzigzag;" => (0x299A, 0x0000),
    "w" => (0x0000, 0x0000),
    "wc" => (0x0000, 0x0000),
    "wci" => (0x0000, 0x0000),
    "wcir" => (0x0000, 0x0000),
    "wcirc" => (0x0000, 0x0000),
    "wcirc;" => (0x0175, 0x0000),
    "we" => (0x0000, 0x0000),
    "wed" => (0x0000, 0x0000),
    "wedb" => (0x0000, 0x0000),
    "wedba" => (0x0000, 0x0000),
    "wedbar" => (0x0000, 0x0000),
    "wedbar;" => (0x2A5F, 0x0000),
    "wedg" => (0x0000, 0x0000),
    "wedge" => (0x0000, 0x0000),
    "wedge;" => (0x2227, 0x0000),
    "wedgeq" => (0x0000, 0x0000),
    "wedgeq;" => (0x2259, 0x0000),
    "wei" => (0x0000, 0x0000),
    "weie" => (0x0000, 0x0000),
    "weier" => (0x0000, 0x0000),
    "weierp" => (0x0000, 0x0000),
    "weierp;" => (0x2118, 0x0000),
    "wf" => (0x0000, 0x0000),
    "wfr" => (0x0000, 0x0000),
    "wfr;" => (0x1D534, 0x0000),
    "wo" => (0x0000, 0x0000),
    "wop" => (0x0000, 0x0000),
    "wopf" => (0x0000, 0x0000),
    "wopf;" => (0x1D568, 0x0000),
    "wp" => (0x0000, 0x0000),
    "wp;" => (0x2118, 0x0000),
    "wr" => (0x0000, 0x0000),
    "wr;" => (0x2240, 0x0000),
    "wre" => (0x0000, 0x0000),
    "wrea" => (0x0000, 0x0000),
    "wreat" => (0x0000, 0x0000),
    "wreath" => (0x0000, 0x0000),
    "wreath;" => (0x2240, 0x0000),
    "ws" => (0x0000, 0x0000),
    "wsc" => (0x0000, 0x0000),
    "wscr" => (0x0000, 0x0000),
    "wscr;" => (0x1D4CC, 0x0000),
    "x" => (0x0000, 0x0000),
    "xc" => (0x0000, 0x0000),
    "xca" => (0x0000, 0x0000),
    "xcap" => (0x0000, 0x0000),
    "xcap;" => (0x22C2, 0x0000),
    "xci" => (0x0000, 0x0000),
    "xcir" => (0x0000, 0x0000),
    "xcirc" => (0x0000, 0x0000),
    "xcirc;" => (0x25EF, 0x0000),
    "xcu" => (0x0000, 0x0000),
    "xcup" => (0x0000, 0x0000),
    "xcup;" => (0x22C3, 0x0000),
    "xd" => (0x0000, 0x0000),
    "xdt" => (0x0000, 0x0000),
    "xdtr" => (0x0000, 0x0000),
    "xdtri" => (0x0000, 0x0000),
    "xdtri;" => (0x25BD, 0x0000),
    "xf" => (0x0000, 0x0000),
    "xfr" => (0x0000, 0x0000),
    "xfr;" => (0x1D535, 0x0000),
    "xh" => (0x0000, 0x0000),
    "xhA" => (0x0000, 0x0000),
    "xhAr" => (0x0000, 0x0000),
    "xhArr" => (0x0000, 0x0000),
    "xhArr;" => (0x27FA, 0x0000),
    "xha" => (0x0000, 0x0000),
    "xhar" => (0x0000, 0x0000),
    "xharr" => (0x0000, 0x0000),
    "xharr;" => (0x27F7, 0x0000),
    "xi" => (0x0000, 0x0000),
    "xi;" => (0x03BE, 0x0000),
    "xl" => (0x0000, 0x0000),
    "xlA" => (0x0000, 0x0000),
    "xlAr" => (0x0000, 0x0000),
    "xlArr" => (0x0000, 0x0000),
    "xlArr;" => (0x27F8, 0x0000),
    "xla" => (0x0000, 0x0000),
    "xlar" => (0x0000, 0x0000),
    "xlarr" => (0x0000, 0x0000),
    "xlarr;" => (0x27F5, 0x0000),
    "xm" => (0x0000, 0x0000),
    "xma" => (0x0000, 0x0000),
    "xmap" => (0x0000, 0x0000),
    "xmap;" => (0x27FC, 0x0000),
    "xn" => (0x0000, 0x0000),
    "xni" => (0x0000, 0x0000),
    "xnis" => (0x0000, 0x0000),
    "xnis;" => (0x22FB, 0x0000),
    "xo" => (0x0000, 0x0000),
    "xod" => (0x0000, 0x0000),
    "xodo" => (0x0000, 0x0000),
    "xodot" => (0x0000, 0x0000),
    "xodot;" => (0x2A00, 0x0000),
    "xop" => (0x0000, 0x0000),
    "xopf" => (0x0000, 0x0000),
    "xopf;" => (0x1D569, 0x0000),
    "xopl" => (0x0000, 0x0000),
    "xoplu" => (0x0000, 0x0000),
    "xoplus" => (0x0000, 0x0000),
    "xoplus;" => (0x2A01, 0x0000),
    "xot" => (0x0000, 0x0000),
    "xoti" => (0x0000, 0x0000),
    "xotim" => (0x0000, 0x0000),
    "xotime" => (0x0000, 0x0000),
    "xotime;" => (0x2A02, 0x0000),
    "xr" => (0x0000, 0x0000),
    "xrA" => (0x0000, 0x0000),
    "xrAr" => (0x0000, 0x0000),
    "xrArr" => (0x0000, 0x0000),
    "xrArr;" => (0x27F9, 0x0000),
    "xra" => (0x0000, 0x0000),
    "xrar" => (0x0000, 0x0000),
    "xrarr" => (0x0000, 0x0000),
    "xrarr;" => (0x27F6, 0x0000),
    "xs" => (0x0000, 0x0000),
    "xsc" => (0x0000, 0x0000),
    "xscr" => (0x0000, 0x0000),
    "xscr;" => (0x1D4CD, 0x0000),
    "xsq" => (0x0000, 0x0000),
    "xsqc" => (0x0000, 0x0000),
    "xsqcu" => (0x0000, 0x0000),
    "xsqcup" => (0x0000, 0x0000),
    "xsqcup;" => (0x2A06, 0x0000),
    "xu" => (0x0000, 0x0000),
    "xup" => (0x0000, 0x0000),
    "xupl" => (0x0000, 0x0000),
    "xuplu" => (0x0000, 0x0000),
    "xuplus" => (0x0000, 0x0000),
    "xuplus;" => (0x2A04, 0x0000),
    "xut" => (0x0000, 0x0000),
    "xutr" => (0x0000, 0x0000),
    "xutri" => (0x0000, 0x0000),
    "xutri;" => (0x25B3, 0x0000),
    "xv" => (0x0000, 0x0000),
    "xve" => (0x0000, 0x0000),
    "xvee" => (0x0000, 0x0000),
    "xvee;" => (0x22C1, 0x0000),
    "xw" => (0x0000, 0x0000),
    "xwe" => (0x0000, 0x0000),
    "xwed" => (0x0000, 0x0000),
    "xwedg" => (0x0000, 0x0000),
    "xwedge" => (0x0000, 0x0000),
    "xwedge;" => (0x22C0, 0x0000),
    "y" => (0x0000, 0x0000),
    "ya" => (0x0000, 0x0000),
    "yac" => (0x0000, 0x0000),
    "yacu" => (0x0000, 0x0000),
    "yacut" => (0x0000, 0x0000),
    "yacute" => (0x00FD, 0x0000),
    "yacute;" => (0x00FD, 0x0000),
    "yacy" => (0x0000, 0x0000),
    "yacy;" => (0x044F, 0x0000),
    "yc" => (0x0000, 0x0000),
    "yci" => (0x0000, 0x0000),
    "ycir" => (0x0000, 0x0000),
    "ycirc" => (0x0000, 0x0000),
    "ycirc;" => (0x0177, 0x0000),
    "ycy" => (0x0000, 0x0000),
    "ycy;" => (0x044B, 0x0000),
    "ye" => (0x0000, 0x0000),
    "yen" => (0x00A5, 0x0000),
    "yen;" => (0x00A5, 0x0000),
    "yf" => (0x0000, 0x0000),
    "yfr" => (0x0000, 0x0000),
    "yfr;" => (0x1D536, 0x0000),
    "yi" => (0x0000, 0x0000),
    "yic" => (0x0000, 0x0000),
    "yicy" => (0x0000, 0x0000),
    "yicy;" => (0x0457, 0x0000),
    "yo" => (0x0000, 0x0000),
    "yop" => (0x0000, 0x0000),
    "yopf" => (0x0000, 0x0000),
    "yopf;" => (0x1D56A, 0x0000),
    "ys" => (0x0000, 0x0000),
    "ysc" => (0x0000, 0x0000),
    "yscr" => (0x0000, 0x0000),
    "yscr;" => (0x1D4CE, 0x0000),
    "yu" => (0x0000, 0x0000),
    "yuc" => (0x0000, 0x0000),
    "yucy" => (0x0000, 0x0000),
    "yucy;" => (0x044E, 0x0000),
    "yum" => (0x0000, 0x0000),
    "yuml" => (0x00FF, 0x0000),
    "yuml;" => (0x00FF, 0x0000),
    "z" => (0x0000, 0x0000),
    "za" => (0x0000, 0x0000),
    "zac" => (0x0000, 0x0000),
    "zacu" => (0x0000, 0x0000),
    "zacut" => (0x0000, 0x0000),
    "zacute" => (0x0000, 0x0000),
    "zacute;" => (0x017A, 0x0000),
    "zc" => (0x0000, 0x0000),
    "zca" => (0x0000, 0x0000),
    "zcar" => (0x0000, 0x0000),
    "zcaro" => (0x0000, 0x0000),
    "zcaron" => (0x0000, 0x0000),
    "zcaron;" => (0x017E, 0x0000),
    "zcy" => (0x0000, 0x0000),
    "zcy;" => (0x0437, 0x0000),
    "zd" => (0x0000, 0x0000),
    "zdo" => (0x0000, 0x0000),
    "zdot" => (0x0000, 0x0000),
    "zdot;" => (0x017C, 0x0000),
    "ze" => (0x0000, 0x0000),
    "zee" => (0x0000, 0x0000),
    "zeet" => (0x0000, 0x0000),
    "zeetr" => (0x0000, 0x0000),
    "zeetrf" => (0x0000, 0x0000),
    "zeetrf;" => (0x2128, 0x0000),
    "zet" => (0x0000, 0x0000),
    "zeta" => (0x0000, 0x0000),
    "zeta;" => (0x03B6, 0x0000),
    "zf" => (0x0000, 0x0000),
    "zfr" => (0x0000, 0x0000),
    "zfr;" => (0x1D537, 0x0000),
    "zh" => (0x0000, 0x0000),
    "zhc" => (0x0000, 0x0000),
    "zhcy" => (0x0000, 0x0000),
    "zhcy;" => (0x0436, 0x0000),
    "zi" => (0x0000, 0x0000),
    "zig" => (0x0000, 0x0000),
    "zigr" => (0x0000, 0x0000),
    "zigra" => (0x0000, 0x0000),
    "zigrar" => (0x0000, 0x0000),
    "zigrarr" => (0x0000, 0x0000),
    "zigrarr;" => (0x21DD, 0x0000),
    "zo" => (0x0000, 0x0000),
    "zop" => (0x0000, 0x0000),
    "zopf" => (0x0000, 0x0000),
    "zopf;" => (0x1D56B, 0x0000),
    "zs" => (0x0000, 0x0000),
    "zsc" => (0x0000, 0x0000),
    "zscr" => (0x0000, 0x0000),
    "zscr;" => (0x1D4CF, 0x0000),
    "zw" => (0x0000, 0x0000),
    "zwj" => (0x0000, 0x0000),
    "zwj;" => (0x200D, 0x0000),
    "zwn" => (0x0000, 0x0000),
    "zwnj" => (0x0000, 0x0000),
    "zwnj;" => (0x200C, 0x0000),
};

/// Replacements for "C1 control" code points in the 0x80-0x9F range, used
/// when a numeric character reference resolves to one of these values.
/// <https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state>
pub(super) static C1_REPLACEMENTS: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];
